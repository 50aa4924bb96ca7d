use glam::{Quat, Vec3};
use physics::{PhysicsError, RigidBody, World};

#[test]
fn register_and_query() {
    let mut world = World::new();
    assert!(world.is_empty());

    let handle = world
        .add_box(Vec3::new(1.0, 2.0, 3.0), Vec3::splat(0.5), 2.0)
        .unwrap();
    assert_eq!(world.len(), 1);
    assert_eq!(world.position(handle).unwrap(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(world.orientation(handle).unwrap(), Quat::IDENTITY);
    assert_eq!(world.body(handle).unwrap().mass, 2.0);
}

#[test]
fn unregister_returns_the_body_and_invalidates_the_handle() {
    let mut world = World::new();
    let handle = world
        .add_box(Vec3::new(4.0, 0.0, 0.0), Vec3::splat(0.5), 1.0)
        .unwrap();

    let body = world.unregister_body(handle).unwrap();
    assert_eq!(body.position, Vec3::new(4.0, 0.0, 0.0));
    assert!(world.is_empty());

    assert_eq!(
        world.unregister_body(handle),
        Err(PhysicsError::BodyNotFound(handle))
    );
    assert!(world.body(handle).is_err());
    assert!(world.set_move_intent(handle, 1.0, 0.0).is_err());
}

#[test]
fn stale_handles_do_not_alias_reused_slots() {
    let mut world = World::new();
    let old = world.add_box(Vec3::ZERO, Vec3::splat(0.5), 1.0).unwrap();
    world.unregister_body(old).unwrap();

    // The replacement reuses the slot under a fresh generation.
    let new = world
        .add_box(Vec3::new(9.0, 0.0, 0.0), Vec3::splat(0.5), 1.0)
        .unwrap();
    assert_ne!(old, new);
    assert!(world.body(old).is_err());
    assert_eq!(world.position(new).unwrap(), Vec3::new(9.0, 0.0, 0.0));
}

#[test]
fn register_rejects_nothing_but_new_validates() {
    // Validation lives at construction; registration takes any valid body.
    let body = RigidBody::new(Vec3::ZERO, Vec3::splat(0.5), 1.0).unwrap();
    let mut world = World::new();
    let handle = world.register_body(body);
    assert!(world.body(handle).is_ok());

    assert!(matches!(
        world.add_box(Vec3::ZERO, Vec3::splat(0.5), -1.0),
        Err(PhysicsError::InvalidMass(_))
    ));
    // The failed add leaves the registry untouched.
    assert_eq!(world.len(), 1);
}

#[test]
fn bodies_iterate_in_stable_slot_order() {
    let mut world = World::new();
    let first = world.add_box(Vec3::ZERO, Vec3::splat(0.5), 1.0).unwrap();
    let second = world
        .add_box(Vec3::new(5.0, 0.0, 0.0), Vec3::splat(0.5), 1.0)
        .unwrap();
    let third = world
        .add_box(Vec3::new(10.0, 0.0, 0.0), Vec3::splat(0.5), 1.0)
        .unwrap();

    let order: Vec<_> = world.bodies().map(|(handle, _)| handle).collect();
    assert_eq!(order, vec![first, second, third]);

    world.unregister_body(second).unwrap();
    let order: Vec<_> = world.bodies().map(|(handle, _)| handle).collect();
    assert_eq!(order, vec![first, third]);
}

#[test]
fn a_lone_body_never_collides_with_itself() {
    let mut world = World::new();
    let handle = world.add_box(Vec3::ZERO, Vec3::splat(0.5), 1.0).unwrap();

    for _ in 0..10 {
        world.step(0.02);
    }

    // No intent, no velocity, no pair: nothing may move it.
    assert_eq!(world.position(handle).unwrap(), Vec3::ZERO);
    assert_eq!(world.body(handle).unwrap().linear_velocity, Vec3::ZERO);
}

#[test]
fn despawn_mid_simulation_skips_the_missing_body() {
    let mut world = World::new();
    let a = world.add_box(Vec3::ZERO, Vec3::splat(0.5), 1.0).unwrap();
    let b = world
        .add_box(Vec3::new(0.5, 0.0, 0.0), Vec3::splat(0.5), 1.0)
        .unwrap();

    world.unregister_body(b).unwrap();
    world.step(0.02);

    // The empty slot is skipped; the survivor sees no contact.
    assert_eq!(world.position(a).unwrap(), Vec3::ZERO);
}
