extern crate meshline_tests;
#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use meshline_tests::meshline::algorithms::raycast::{raycast_line, Raycaster, Topology};
use meshline_tests::meshline::math::{point, vector, Ray, Transform};
use meshline_tests::meshline::path::PointSource;
use meshline_tests::meshline::tessellation::{build_line_buffers, LineBuffers, MeshLine};
use meshline_tests::*;

const SIZES: [usize; 4] = [16, 256, 4096, 32768];

fn update_trail(c: &mut Criterion) {
    let mut g = c.benchmark_group("trail");
    for n in &SIZES {
        let points = helix(*n);

        g.bench_with_input(BenchmarkId::new("rebuild", n), n, |b, _| {
            let mut buffers = LineBuffers::with_point_capacity(points.len());
            b.iter(|| {
                build_line_buffers(&points, None, &mut buffers).unwrap();
                std::hint::black_box(buffers.positions());
            })
        });

        g.bench_with_input(BenchmarkId::new("advance", n), n, |b, _| {
            let mut line = MeshLine::with_points(PointSource::Points(&points), None).unwrap();
            let mut x = 0.0;
            b.iter(|| {
                x += 0.01;
                line.advance(point(x, 0.0, 0.0));
                std::hint::black_box(line.buffers().positions());
            })
        });
    }
}

fn pick(c: &mut Criterion) {
    let mut g = c.benchmark_group("pick");
    for n in &SIZES {
        let line = MeshLine::with_points(PointSource::Points(&helix(*n)), None).unwrap();
        // Misses the helix so that every segment is visited.
        let raycaster = Raycaster::new(Ray::new(point(0.0, 0.0, -10.0), vector(0.0, 0.0, 1.0)))
            .with_line_threshold(0.01);

        g.bench_with_input(BenchmarkId::new("strip", n), n, |b, _| {
            b.iter(|| {
                std::hint::black_box(raycast_line(
                    &raycaster,
                    line.buffers(),
                    0.01,
                    &Transform::identity(),
                    Topology::Strip,
                ));
            })
        });
    }
}

criterion_group!(line_buffers, update_trail, pick);

criterion_main!(line_buffers);
