#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # OBB Physics Core
//!
//! A small impulse-based rigid body engine for real-time simulations built
//! around oriented bounding boxes.
//!
//! The engine runs a single-threaded, fixed-timestep loop: every tick each
//! body integrates its movement intent into a new velocity and pose, then
//! every unordered pair of boxes is tested with the separating axis theorem
//! and overlapping pairs are pushed apart and given an impulse response.
//!
//! ## Key Components
//!
//! -   **Rigid Bodies:** [`RigidBody`] carries the pose, box geometry, mass,
//!     restitution and velocities of one entity. Bodies are defined in the
//!     [`types`] module.
//! -   **World:** The [`World`] struct in the [`world`] module owns every
//!     live body behind a stable [`BodyHandle`] and drives one simulation
//!     tick with [`World::step`].
//! -   **Collision:** The [`collision`] module implements the SAT overlap
//!     test and minimum-translation-vector computation for box pairs, plus
//!     the mass- and restitution-aware contact resolution.
//!
//! ## Usage
//!
//! ```rust
//! use glam::Vec3;
//! use physics::World;
//!
//! let mut world = World::new();
//! let player = world.add_box(Vec3::ZERO, Vec3::splat(0.5), 1.0).unwrap();
//!
//! let dt = 0.02;
//! for _ in 0..100 {
//!     world.set_move_intent(player, 1.0, 0.0).unwrap();
//!     world.step(dt);
//! }
//! ```
//!
//! Detection is brute-force over all pairs; there is no broad phase, no
//! continuous collision detection and no friction or angular impulse
//! transfer. Those limits keep the core small and are acceptable for the
//! body counts this engine targets.

pub mod collision;
pub mod error;
pub mod integrator;
pub mod types;
pub mod world;

pub use collision::{compute_mtd, is_colliding, resolve_contact, Contact};
pub use error::PhysicsError;
pub use types::{MoveIntent, RigidBody, TuningParams};
pub use world::{BodyHandle, World};
