use criterion::{criterion_group, criterion_main, Criterion};
use glam::Vec3;
use physics::World;

fn all_pairs_step(c: &mut Criterion) {
    c.bench_function("step_32_boxes", |b| {
        let mut world = World::new();
        for i in 0..32_u32 {
            let pos = Vec3::new(
                (i % 4) as f32 * 1.4,
                ((i / 4) % 4) as f32 * 1.4,
                (i / 16) as f32 * 1.4,
            );
            world.add_box(pos, Vec3::splat(0.5), 1.0).unwrap();
        }
        b.iter(|| world.step(0.01));
    });
}

criterion_group!(benches, all_pairs_step);
criterion_main!(benches);
