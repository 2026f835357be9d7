use criterion::{black_box, criterion_group, criterion_main, Criterion};
use remap_animation_core::{
    bake, optimize_points, AnimatedTransform, AnimationSettings, OptimizeSettings, Point,
    PointDefinition,
};

fn wobble(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            Point::new([(t * 6.0).sin(), t * 2.0, 0.0], t)
        })
        .collect()
}

fn bench_optimize(c: &mut Criterion) {
    let settings = OptimizeSettings::default();
    let points = wobble(512);
    c.bench_function("optimize_512_points", |b| {
        b.iter(|| optimize_points(black_box(points.clone()), &settings))
    });
}

fn bench_bake(c: &mut Criterion) {
    let settings = AnimationSettings::default();
    let animated = AnimatedTransform {
        position: Some(PointDefinition::Keyframes(wobble(16))),
        rotation: Some(PointDefinition::Keyframes(vec![
            Point::new([0.0, 0.0, 0.0], 0.0),
            Point::new([0.0, 180.0, 45.0], 1.0),
        ])),
        scale: None,
    };
    c.bench_function("bake_transform", |b| {
        b.iter(|| bake(black_box(&animated), None, &settings, None))
    });
}

criterion_group!(benches, bench_optimize, bench_bake);
criterion_main!(benches);
