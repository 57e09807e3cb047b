use criterion::{Criterion, black_box, criterion_group, criterion_main};

use analysis_visualizer::controllers::cli::export_controller::render_frame;
use analysis_visualizer::core::visualizers::visualizer_kinds::VisualizerKinds;
use analysis_visualizer::core::visualizers::weierstrass::series::weierstrass;

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    for &kind in VisualizerKinds::ALL {
        group.bench_function(kind.slug(), |b| {
            b.iter(|| render_frame(black_box(kind), 600, 400).unwrap())
        });
    }

    group.finish();
}

fn bench_weierstrass_series(c: &mut Criterion) {
    c.bench_function("weierstrass_series_600_columns", |b| {
        b.iter(|| {
            (0..600)
                .map(|i| weierstrass(black_box(0.5), black_box(7.0), i as f64 / 300.0 - 1.0))
                .sum::<f64>()
        })
    });
}

criterion_group!(benches, bench_render_frame, bench_weierstrass_series);
criterion_main!(benches);
