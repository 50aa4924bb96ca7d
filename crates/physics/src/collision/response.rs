//! Impulse-based contact resolution.

use crate::collision::Contact;
use crate::types::RigidBody;

/// Resolve one contact between two overlapping bodies.
///
/// Applies an impulse along the contact normal sized by the pair's combined
/// inverse mass and the lower of the two restitutions, then pushes the
/// bodies apart along the MTD. Each body absorbs the share of the
/// correction proportional to the *other* body's mass, so the heavier body
/// moves less.
///
/// If the bodies are already separating along the normal the contact is
/// skipped entirely, positional correction included.
///
/// No friction impulse and no angular impulse: a contact only ever changes
/// linear velocity and position.
pub fn resolve_contact(body_a: &mut RigidBody, body_b: &mut RigidBody, contact: &Contact) {
    let normal = contact.normal();

    let relative_velocity = body_b.linear_velocity - body_a.linear_velocity;
    let velocity_along_normal = relative_velocity.dot(normal);

    // Already separating along the normal; leave positions alone too.
    if velocity_along_normal > 0.0 {
        return;
    }

    let restitution = body_a.restitution.min(body_b.restitution);
    let impulse_magnitude = -(1.0 + restitution) * velocity_along_normal
        / (body_a.inv_mass() + body_b.inv_mass());
    let impulse = normal * impulse_magnitude;

    body_a.linear_velocity -= impulse * body_a.inv_mass();
    body_b.linear_velocity += impulse * body_b.inv_mass();

    let total_mass = body_a.mass + body_b.mass;
    body_a.position -= contact.mtd * (body_b.mass / total_mass);
    body_b.position += contact.mtd * (body_a.mass / total_mass);
}
