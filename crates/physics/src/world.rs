//! # World / Body Registry
//!
//! Owns every live [`RigidBody`] behind a stable generational handle and
//! drives one simulation tick: integrate every body, then test and resolve
//! every unordered pair.
//!
//! Iteration always runs in slot order, so a given set of bodies produces
//! the same pair order every tick and replays deterministically. Bodies are
//! mutated in place during resolution; later pairs within one tick observe
//! already-corrected state from earlier pairs. That ordering dependence is
//! inherited behavior and kept as-is, no snapshot-then-commit.

use glam::{Quat, Vec3};

use crate::collision::{self, Contact};
use crate::error::PhysicsError;
use crate::integrator;
use crate::types::{MoveIntent, RigidBody, TuningParams};

/// Stable identity of a registered body.
///
/// Handles survive unrelated spawns and despawns; unregistering a body
/// bumps its slot generation, so stale handles fail instead of silently
/// aliasing a newer body in the same slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

struct Slot {
    generation: u32,
    body: Option<RigidBody>,
}

/// The set of live bodies plus the shared integrator tuning.
#[derive(Default)]
pub struct World {
    slots: Vec<Slot>,
    free: Vec<u32>,
    pub params: TuningParams,
}

impl World {
    /// Create an empty world with default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a body and return its stable handle.
    pub fn register_body(&mut self, body: RigidBody) -> BodyHandle {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.body = Some(body);
            BodyHandle {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                body: Some(body),
            });
            BodyHandle {
                index,
                generation: 0,
            }
        }
    }

    /// Construct and register a box body in one call.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`RigidBody::new`].
    pub fn add_box(
        &mut self,
        position: Vec3,
        half_extents: Vec3,
        mass: f32,
    ) -> Result<BodyHandle, PhysicsError> {
        Ok(self.register_body(RigidBody::new(position, half_extents, mass)?))
    }

    /// Remove a body, returning its final state.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::BodyNotFound`] for stale or never-issued
    /// handles.
    pub fn unregister_body(&mut self, handle: BodyHandle) -> Result<RigidBody, PhysicsError> {
        let slot = self
            .slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .ok_or(PhysicsError::BodyNotFound(handle))?;
        let body = slot.body.take().ok_or(PhysicsError::BodyNotFound(handle))?;
        slot.generation += 1;
        self.free.push(handle.index);
        Ok(body)
    }

    /// Read-only access to a body.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::BodyNotFound`] for stale or never-issued
    /// handles.
    pub fn body(&self, handle: BodyHandle) -> Result<&RigidBody, PhysicsError> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.body.as_ref())
            .ok_or(PhysicsError::BodyNotFound(handle))
    }

    /// Mutable access to a body.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::BodyNotFound`] for stale or never-issued
    /// handles.
    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody, PhysicsError> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.body.as_mut())
            .ok_or(PhysicsError::BodyNotFound(handle))
    }

    /// Record a body's movement intent for the next tick. Supplied each
    /// frame by an input collaborator; values pass through unvalidated and
    /// persist until overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::BodyNotFound`] for stale or never-issued
    /// handles.
    pub fn set_move_intent(
        &mut self,
        handle: BodyHandle,
        forward: f32,
        yaw: f32,
    ) -> Result<(), PhysicsError> {
        self.body_mut(handle)?.intent = MoveIntent { forward, yaw };
        Ok(())
    }

    /// Current world position of a body, for presentation collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::BodyNotFound`] for stale or never-issued
    /// handles.
    pub fn position(&self, handle: BodyHandle) -> Result<Vec3, PhysicsError> {
        Ok(self.body(handle)?.position)
    }

    /// Current world orientation of a body, for presentation collaborators.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::BodyNotFound`] for stale or never-issued
    /// handles.
    pub fn orientation(&self, handle: BodyHandle) -> Result<Quat, PhysicsError> {
        Ok(self.body(handle)?.orientation)
    }

    /// Iterate all live bodies with their handles, in stable slot order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.body.as_ref().map(|body| {
                (
                    BodyHandle {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    body,
                )
            })
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.body.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance the simulation by one fixed tick.
    ///
    /// Every body integrates its intent first, so collision tests always see
    /// post-movement positions; then every unordered pair is tested in slot
    /// order and overlapping pairs are resolved in place.
    pub fn step(&mut self, dt: f32) {
        for slot in &mut self.slots {
            if let Some(body) = slot.body.as_mut() {
                integrator::integrate(body, &self.params, dt);
            }
        }

        let slot_count = self.slots.len();
        let mut resolved = 0_usize;
        for i in 0..slot_count {
            for j in (i + 1)..slot_count {
                // Two disjoint &mut into the slot vec.
                let (head, tail) = self.slots.split_at_mut(j);
                let generation_a = head[i].generation;
                let generation_b = tail[0].generation;
                if let (Some(body_a), Some(body_b)) =
                    (head[i].body.as_mut(), tail[0].body.as_mut())
                {
                    if !collision::is_colliding(body_a, body_b) {
                        continue;
                    }
                    let mtd = collision::compute_mtd(body_a, body_b);
                    if mtd == Vec3::ZERO {
                        continue;
                    }
                    let contact = Contact::new(mtd);
                    let handle_a = BodyHandle {
                        index: i as u32,
                        generation: generation_a,
                    };
                    let handle_b = BodyHandle {
                        index: j as u32,
                        generation: generation_b,
                    };
                    tracing::trace!(
                        a = ?handle_a,
                        b = ?handle_b,
                        depth = contact.depth(),
                        "resolving contact"
                    );
                    collision::resolve_contact(body_a, body_b, &contact);
                    resolved += 1;
                }
            }
        }
        if resolved > 0 {
            tracing::debug!(resolved, "contacts resolved this tick");
        }
    }
}
