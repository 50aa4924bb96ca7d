use glam::Vec3;
use thiserror::Error;

use crate::world::BodyHandle;

/// Errors surfaced by body construction and registry operations.
///
/// Collision and resolution functions never fail; they always produce a
/// definite (possibly zero) result. Construction rejects degenerate bodies
/// up front so the divide-by-mass math downstream never sees them.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PhysicsError {
    #[error("mass must be > 0 (got {0})")]
    InvalidMass(f32),
    #[error("half-extents must be component-wise positive (got {0})")]
    InvalidHalfExtents(Vec3),
    #[error("no body registered under {0:?}")]
    BodyNotFound(BodyHandle),
}
