use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cube_sphere::placer::look_at_origin;
use cube_sphere::{place, LineSpec, Sphere};
use glam::Vec3;

/// Benchmark: placing the default 56-cube scene
fn bench_place_default_scene(c: &mut Criterion) {
    let mut sphere = Sphere::default_scene();

    c.bench_function("place_default_scene", |b| {
        b.iter(|| {
            place(black_box(&mut sphere));
        })
    });
}

/// Benchmark: placing a deliberately oversized scene
fn bench_place_large_scene(c: &mut Criterion) {
    let specs: Vec<LineSpec> = (0..50)
        .map(|i| LineSpec::new(100, (i as f32 / 25.0) - 1.0, 1.0))
        .collect();
    let mut sphere = Sphere::new(5.0, &specs).expect("bench specs are valid");

    c.bench_function("place_5000_cubes", |b| {
        b.iter(|| {
            place(black_box(&mut sphere));
        })
    });
}

/// Benchmark: the look-at rotation alone
fn bench_look_at_origin(c: &mut Criterion) {
    let position = Vec3::new(1.5, 0.7, -0.3);

    c.bench_function("look_at_origin", |b| {
        b.iter(|| black_box(look_at_origin(black_box(position))))
    });
}

criterion_group!(
    benches,
    bench_place_default_scene,
    bench_place_large_scene,
    bench_look_at_origin
);
criterion_main!(benches);
