#![deny(clippy::all, clippy::pedantic)]

//! Fixed-timestep driver for the OBB physics core.
//!
//! Owns the simulation loop: sets up a small scene, feeds a constant
//! movement intent for the driven body each tick (standing in for an input
//! collaborator) and reports positions periodically. Pause/resume and
//! rendering live with the application embedding this loop, not here.

use anyhow::Result;
use glam::Vec3;
use physics::{TuningParams, World};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Initializing world...");
    let mut world = World::new();
    world.params = TuningParams {
        speed: 4.0,
        rot_speed: 2.0,
        friction: 0.4,
        drag: 0.15,
        angular_drag: 0.8,
    };

    let player = world.add_box(Vec3::new(0.0, 0.5, 8.0), Vec3::splat(0.5), 1.0)?;
    let mut crate_handle = world.add_box(Vec3::new(0.0, 0.5, 2.0), Vec3::splat(0.5), 2.0)?;
    world.body_mut(crate_handle)?.restitution = 0.4;
    let wall = world.add_box(Vec3::new(0.0, 0.5, -4.0), Vec3::new(3.0, 0.5, 0.5), 50.0)?;
    world.body_mut(wall)?.restitution = 0.2;

    let dt = 0.02_f32;
    let num_steps = 500;
    tracing::info!(
        "Starting simulation loop for {} steps with dt = {}...",
        num_steps,
        dt
    );
    for i in 0..num_steps {
        // An input collaborator would sample devices here; we drive the
        // player straight ahead.
        world.set_move_intent(player, 1.0, 0.0)?;
        world.step(dt);

        if (i + 1) % 100 == 0 {
            tracing::info!(
                "Step {} complete. Player at {}, crate at {}",
                i + 1,
                world.position(player)?,
                world.position(crate_handle)?
            );
        }

        // Halfway through, respawn the crate elsewhere to exercise the
        // registry the way scene management would.
        if i + 1 == num_steps / 2 {
            let old = world.unregister_body(crate_handle)?;
            tracing::info!("Despawned crate at {}", old.position);
            crate_handle = world.add_box(Vec3::new(1.5, 0.5, 0.0), Vec3::splat(0.5), 2.0)?;
        }
    }

    tracing::info!("Simulation loop finished after {} steps.", num_steps);
    tracing::info!("Final player position: {}", world.position(player)?);
    tracing::info!("Final player orientation: {}", world.orientation(player)?);
    Ok(())
}
