//! Separating axis theorem for oriented box pairs.
//!
//! Both boxes contribute their three world-space axes as candidates, plus
//! the nine pairwise cross products (skipping near-parallel pairs), for at
//! most 15 axes. Two boxes overlap iff their vertex projections overlap on
//! every candidate axis.

use glam::Vec3;

use crate::types::RigidBody;

/// Cross products below this squared length are treated as parallel axes.
const PARALLEL_AXIS_EPS: f32 = 1e-12;

/// True iff no separating axis exists between the two boxes.
///
/// The projection overlap test is boundary-inclusive, so exactly touching
/// faces count as colliding.
#[must_use]
pub fn is_colliding(body_a: &RigidBody, body_b: &RigidBody) -> bool {
    let verts_a = body_a.world_vertices();
    let verts_b = body_b.world_vertices();

    for axis in candidate_axes(body_a, body_b) {
        if !overlap_on_axis(&verts_a, &verts_b, axis) {
            return false;
        }
    }
    true
}

/// Minimum translation vector separating the two boxes.
///
/// Returns the zero vector when any candidate axis shows a non-positive
/// overlap; this is the authoritative collision decision used before
/// resolution and agrees with [`is_colliding`] up to the boundary case of
/// exactly touching faces, where the overlap is zero. The result points
/// from `body_a` toward `body_b`, so swapping the arguments negates it.
#[must_use]
pub fn compute_mtd(body_a: &RigidBody, body_b: &RigidBody) -> Vec3 {
    let verts_a = body_a.world_vertices();
    let verts_b = body_b.world_vertices();

    let mut min_overlap = f32::MAX;
    let mut mtd = Vec3::ZERO;

    for axis in candidate_axes(body_a, body_b) {
        let overlap = overlap_magnitude(&verts_a, &verts_b, axis);
        if overlap <= 0.0 {
            // Separated (or merely touching) on this axis.
            return Vec3::ZERO;
        }
        if overlap < min_overlap {
            min_overlap = overlap;
            mtd = axis * overlap;
        }
    }

    // Orient the translation from A toward B so pair order fixes the sign.
    if mtd.dot(body_b.world_center() - body_a.world_center()) < 0.0 {
        mtd = -mtd;
    }
    mtd
}

/// The ≤15 candidate separating axes for a box pair: A's three axes, B's
/// three axes, then the normalized non-degenerate cross products.
fn candidate_axes(body_a: &RigidBody, body_b: &RigidBody) -> Vec<Vec3> {
    let axes_a = body_a.world_axes();
    let axes_b = body_b.world_axes();

    let mut axes = Vec::with_capacity(15);
    axes.extend_from_slice(&axes_a);
    axes.extend_from_slice(&axes_b);
    for axis_a in axes_a {
        for axis_b in axes_b {
            let cross = axis_a.cross(axis_b);
            if cross.length_squared() > PARALLEL_AXIS_EPS {
                axes.push(cross.normalize());
            }
        }
    }
    axes
}

/// Project all vertices onto `axis` and return the `[min, max]` interval.
fn project_onto_axis(vertices: &[Vec3; 8], axis: Vec3) -> (f32, f32) {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for vertex in vertices {
        let projection = vertex.dot(axis);
        min = min.min(projection);
        max = max.max(projection);
    }
    (min, max)
}

fn overlap_on_axis(verts_a: &[Vec3; 8], verts_b: &[Vec3; 8], axis: Vec3) -> bool {
    let (min_a, max_a) = project_onto_axis(verts_a, axis);
    let (min_b, max_b) = project_onto_axis(verts_b, axis);
    max_a >= min_b && max_b >= min_a
}

/// Signed interval overlap on `axis`; negative means separation.
fn overlap_magnitude(verts_a: &[Vec3; 8], verts_b: &[Vec3; 8], axis: Vec3) -> f32 {
    let (min_a, max_a) = project_onto_axis(verts_a, axis);
    let (min_b, max_b) = project_onto_axis(verts_b, axis);
    (max_a - min_b).min(max_b - min_a)
}
