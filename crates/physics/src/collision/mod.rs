//! # Collision Detection and Response
//!
//! Separating-axis overlap tests between oriented boxes and impulse-based
//! contact resolution. Detection is exact for box pairs; there is no broad
//! phase, callers test every unordered pair.

mod response;
mod sat;

pub use response::resolve_contact;
pub use sat::{compute_mtd, is_colliding};

use glam::Vec3;

/// Contact information for one colliding pair.
///
/// Built per pair per tick, only when the pair overlaps, and discarded
/// after resolution. The `mtd` points from body A toward body B; its
/// magnitude is the penetration depth along the axis of least overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub mtd: Vec3,
}

impl Contact {
    #[must_use]
    pub fn new(mtd: Vec3) -> Self {
        Self { mtd }
    }

    /// Unit collision normal, from body A toward body B.
    #[must_use]
    pub fn normal(&self) -> Vec3 {
        self.mtd.normalize()
    }

    /// Penetration depth along the normal.
    #[must_use]
    pub fn depth(&self) -> f32 {
        self.mtd.length()
    }
}
