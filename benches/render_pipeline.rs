use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_explorer::{
    ColourTable, Complex, MandelbrotAlgorithm, NeverCancel, TraceOptions, Viewport,
    ViewportLimits, generate_fractal_parallel_rayon, generate_pixel_buffer, trace_boundaries,
};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn views() -> Vec<(&'static str, Viewport)> {
    let limits = ViewportLimits::default();

    vec![
        ("default", Viewport::default()),
        (
            "seahorse_valley",
            Viewport::new(Complex::new(-0.745, 0.11), 64.0, 1024, &limits),
        ),
    ]
}

fn bench_render_pipeline(c: &mut Criterion) {
    let limits = ViewportLimits::default();
    let table = ColourTable::build();
    let mut group = c.benchmark_group("render_pipeline");
    group.sample_size(10);

    for (name, viewport) in views() {
        let algorithm = match MandelbrotAlgorithm::for_viewport(&viewport, &limits, WIDTH, HEIGHT) {
            Ok(algorithm) => algorithm,
            Err(err) => panic!("bench view {name} is invalid: {err}"),
        };
        let frame = algorithm.frame();

        group.bench_with_input(BenchmarkId::new("direct", name), &algorithm, |b, algorithm| {
            b.iter(|| {
                let values = generate_fractal_parallel_rayon(frame, algorithm)
                    .map_err(|err| err.to_string());
                let buffer = values.and_then(|values| {
                    generate_pixel_buffer(values, &table, frame).map_err(|err| err.to_string())
                });
                black_box(buffer)
            })
        });

        for (mode, options) in [
            ("traced_parallel", TraceOptions::default()),
            ("traced_sequential", TraceOptions::sequential()),
        ] {
            group.bench_with_input(BenchmarkId::new(mode, name), &algorithm, |b, algorithm| {
                b.iter(|| black_box(trace_boundaries(frame, algorithm, &table, options, &NeverCancel)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_render_pipeline);
criterion_main!(benches);
