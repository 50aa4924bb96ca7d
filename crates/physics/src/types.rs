//! # Rigid Body Types
//!
//! Core data types for the simulation: the rigid body itself, the per-body
//! movement intent fed in by input collaborators, and the integrator tuning
//! parameters.

use glam::{Affine3A, Quat, Vec3};

use crate::error::PhysicsError;

/// Desired movement for one body, supplied each frame by an input
/// collaborator. `forward` scales motion along the body's forward axis,
/// `yaw` is a turn rate about the body's local Y axis. Values are typically
/// in [-1, 1] but are passed through unvalidated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent {
    pub forward: f32,
    pub yaw: f32,
}

/// Integrator tuning shared by every body in a [`World`](crate::World).
///
/// Negative `friction`/`drag`/`angular_drag` values are accepted without
/// validation and will amplify velocity instead of damping it. That is
/// inherited behavior, kept rather than guarded against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TuningParams {
    /// Scale applied to velocity when advancing position.
    pub speed: f32,
    /// Scale applied to the yaw intent, in radians per second.
    pub rot_speed: f32,
    /// Velocity-proportional friction coefficient.
    pub friction: f32,
    /// Linear drag coefficient (explicit Euler exponential damping).
    pub drag: f32,
    /// Angular decay budget, in radians per second of slew toward identity.
    pub angular_drag: f32,
}

impl Default for TuningParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            rot_speed: 1.0,
            friction: 0.0,
            drag: 0.0,
            angular_drag: 0.0,
        }
    }
}

/// One oriented-box rigid body.
///
/// The box geometry lives in local space (`center_offset` ± `half_extents`)
/// and is carried into world space by `position` and `orientation`.
/// `angular_velocity` is tracked but never coupled into collision response;
/// contacts only ever change linear velocity and position.
#[derive(Debug, Clone, PartialEq)]
pub struct RigidBody {
    pub position: Vec3,
    pub orientation: Quat,
    pub half_extents: Vec3,
    pub center_offset: Vec3,
    pub mass: f32,
    pub restitution: f32,
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
    pub intent: MoveIntent,
}

impl RigidBody {
    /// Create a body at `position` with the given box half-extents and mass.
    ///
    /// Orientation starts at identity, velocities at zero and restitution at
    /// 0.7; adjust the public fields afterwards as needed.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::InvalidMass`] unless `mass` is finite and
    /// positive, and [`PhysicsError::InvalidHalfExtents`] unless
    /// `half_extents` is finite and component-wise positive.
    pub fn new(position: Vec3, half_extents: Vec3, mass: f32) -> Result<Self, PhysicsError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(PhysicsError::InvalidMass(mass));
        }
        if !half_extents.is_finite() || !half_extents.cmpgt(Vec3::ZERO).all() {
            return Err(PhysicsError::InvalidHalfExtents(half_extents));
        }
        Ok(Self {
            position,
            orientation: Quat::IDENTITY,
            half_extents,
            center_offset: Vec3::ZERO,
            mass,
            restitution: 0.7,
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            intent: MoveIntent::default(),
        })
    }

    #[must_use]
    pub fn inv_mass(&self) -> f32 {
        1.0 / self.mass
    }

    /// The body's forward axis in world space (local -Z).
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// The box center in world space, including the local center offset.
    #[must_use]
    pub fn world_center(&self) -> Vec3 {
        self.position + self.orientation * self.center_offset
    }

    /// The box's three local orthonormal axes carried into world space.
    #[must_use]
    pub fn world_axes(&self) -> [Vec3; 3] {
        [
            self.orientation * Vec3::X,
            self.orientation * Vec3::Y,
            self.orientation * Vec3::Z,
        ]
    }

    /// The 8 box corners in local space, `center_offset ± half_extents`.
    #[must_use]
    pub fn local_corners(&self) -> [Vec3; 8] {
        let c = self.center_offset;
        let e = self.half_extents;
        [
            c + Vec3::new(-e.x, -e.y, -e.z),
            c + Vec3::new(-e.x, -e.y, e.z),
            c + Vec3::new(e.x, -e.y, e.z),
            c + Vec3::new(e.x, -e.y, -e.z),
            c + Vec3::new(-e.x, e.y, -e.z),
            c + Vec3::new(-e.x, e.y, e.z),
            c + Vec3::new(e.x, e.y, e.z),
            c + Vec3::new(e.x, e.y, -e.z),
        ]
    }

    /// The 8 box corners transformed by the body's local-to-world affine.
    #[must_use]
    pub fn world_vertices(&self) -> [Vec3; 8] {
        let local_to_world = Affine3A::from_rotation_translation(self.orientation, self.position);
        self.local_corners()
            .map(|corner| local_to_world.transform_point3(corner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_mass() {
        assert!(RigidBody::new(Vec3::ZERO, Vec3::ONE, 0.0).is_err());
        assert!(RigidBody::new(Vec3::ZERO, Vec3::ONE, -1.0).is_err());
        assert!(RigidBody::new(Vec3::ZERO, Vec3::ONE, f32::NAN).is_err());
        assert!(RigidBody::new(Vec3::ZERO, Vec3::ONE, 1.0).is_ok());
    }

    #[test]
    fn rejects_degenerate_half_extents() {
        assert!(RigidBody::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0), 1.0).is_err());
        assert!(RigidBody::new(Vec3::ZERO, Vec3::new(-1.0, 1.0, 1.0), 1.0).is_err());
        assert!(RigidBody::new(Vec3::ZERO, Vec3::splat(0.5), 1.0).is_ok());
    }

    #[test]
    fn world_vertices_follow_pose() {
        let mut body = RigidBody::new(Vec3::new(2.0, 0.0, 0.0), Vec3::splat(0.5), 1.0).unwrap();
        let verts = body.world_vertices();
        for v in verts {
            assert!((v.x - 2.0).abs() <= 0.5 + 1e-6);
            assert!(v.y.abs() <= 0.5 + 1e-6);
            assert!(v.z.abs() <= 0.5 + 1e-6);
        }

        // A quarter turn about Y swaps the X and Z extents.
        body.half_extents = Vec3::new(2.0, 0.5, 0.5);
        body.orientation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let verts = body.world_vertices();
        let max_z = verts.iter().map(|v| v.z).fold(f32::MIN, f32::max);
        assert!((max_z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn world_center_includes_offset() {
        let mut body = RigidBody::new(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(0.5), 1.0).unwrap();
        body.center_offset = Vec3::new(0.0, 3.0, 0.0);
        assert_eq!(body.world_center(), Vec3::new(1.0, 3.0, 0.0));
    }
}
