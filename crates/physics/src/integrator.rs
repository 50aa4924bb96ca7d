//! # Velocity/Drag Integrator
//!
//! Advances one body per fixed tick from its accumulated movement intent,
//! applying drag, friction and angular damping.
//!
//! Two quirks are kept on purpose for behavioral fidelity with the system
//! this engine replaces:
//!
//! -   The input term builds a momentum from the body's mass and immediately
//!     divides it back out, so mass never affects translational
//!     acceleration. Documented rather than corrected, since the intended
//!     behavior is ambiguous.
//! -   Angular decay slews the orientation toward identity by a fixed angle
//!     budget per tick instead of damping an angular-velocity vector. This
//!     is a simplification, not true angular dynamics.

use glam::{Quat, Vec3};

use crate::types::{RigidBody, TuningParams};

/// Advance one body by `dt` seconds.
///
/// With `dt == 0` this is a no-op. Negative damping coefficients are passed
/// through and amplify velocity; see [`TuningParams`].
pub fn integrate(body: &mut RigidBody, params: &TuningParams, dt: f32) {
    let move_dir = body.forward() * body.intent.forward;

    // Input acceleration dressed up as a momentum; the mass cancels.
    let momentum = move_dir * body.mass;
    body.linear_velocity += momentum * dt / body.mass;

    body.linear_velocity -= body.linear_velocity * params.drag * dt;

    let friction_force = -body.linear_velocity * params.friction * body.mass;
    body.linear_velocity += friction_force * dt;

    body.position += body.linear_velocity * params.speed * dt;

    // Yaw intent composes in local space.
    let delta_rotation = Quat::from_rotation_y(body.intent.yaw * params.rot_speed * dt);
    body.orientation = (body.orientation * delta_rotation).normalize();

    body.orientation = rotate_towards(body.orientation, Quat::IDENTITY, params.angular_drag * dt);
}

/// Rotate `from` toward `to` by at most `max_angle` radians, never
/// overshooting the target.
fn rotate_towards(from: Quat, to: Quat, max_angle: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle < 1e-6 {
        return to;
    }
    from.slerp(to, (max_angle / angle).min(1.0))
}
