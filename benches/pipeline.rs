use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mtx_proj::matrix::projection::PROJECTION;
use mtx_proj::matrix::transformations::uniform_scale;
use mtx_proj::matrix::{viewport_matrix, Vector4};
use mtx_proj::pipeline::{compose, eye_to_ndc};

pub fn bench_eye_to_window(c: &mut Criterion) {
    let points = (0..1000)
        .map(|i| {
            let i = f64::from(i);
            Vector4::point(i * 0.01, -i * 0.02, -1. - i * 0.1)
        })
        .collect::<Vec<_>>();
    let viewport = viewport_matrix(1920, 1080);
    let transform = compose(&[uniform_scale(3.), PROJECTION]);

    c.bench_function("eye to ndc", |b| {
        b.iter(|| {
            for p in &points {
                black_box(eye_to_ndc(black_box(&transform), p).unwrap());
            }
        })
    });

    c.bench_function("eye to window", |b| {
        b.iter(|| {
            for p in &points {
                let ndc = eye_to_ndc(black_box(&transform), p).unwrap();
                black_box(viewport * ndc);
            }
        })
    });
}

criterion_group!(benches, bench_eye_to_window);
criterion_main!(benches);
