//! Benchmarks for stepping a populated world.
//!
//! Run with: cargo bench --bench world_step

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use impulse_2d::{
    math::Vector2,
    shapes::{Polygon, Shape},
    PhysicsWorld, RigidBody,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Ground plus `count` dynamic bodies dropped in a loose grid, alternating
/// circles and random hulls.
fn create_pile(count: usize) -> PhysicsWorld {
    let mut rng = StdRng::seed_from_u64(42);
    let mut world = PhysicsWorld::new(1.0 / 60.0, 10);
    world.add_body(RigidBody::new_static(Shape::rectangle(60.0, 1.0), Vector2::new(0.0, 50.0)));

    let columns = 20;
    for i in 0..count {
        let x = (i % columns) as f32 * 5.0 - 50.0;
        let y = 45.0 - (i / columns) as f32 * 5.0;

        if i % 2 == 0 {
            world.add(Shape::circle(rng.gen_range(1.0..2.0)), x, y);
        } else {
            let points: Vec<Vector2> = (0..8)
                .map(|_| Vector2::new(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0)))
                .collect();
            match Polygon::from_points(&points) {
                Ok(polygon) => world.add(Shape::from(polygon), x, y),
                Err(_) => world.add(Shape::rectangle(1.5, 1.5), x, y),
            };
        }
    }

    // Let the pile come into contact before measuring
    for _ in 0..60 {
        world.step();
    }

    world
}

fn bench_world_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("world_step");

    for count in [10, 50, 200] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let mut world = create_pile(count);
            b.iter(|| {
                world.step();
                black_box(world.get_contacts().len())
            });
        });
    }

    group.finish();
}

fn bench_polygon_hull(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<Vector2> = (0..64)
        .map(|_| Vector2::new(rng.gen_range(-10.0..10.0), rng.gen_range(-10.0..10.0)))
        .collect();

    c.bench_function("polygon_hull_64", |b| {
        b.iter(|| Polygon::from_points(black_box(&points)))
    });
}

criterion_group!(benches, bench_world_step, bench_polygon_hull);
criterion_main!(benches);
