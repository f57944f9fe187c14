//! Benchmarks for the renderer crate - SVG generation and rasterization.
//!
//! Run with: cargo bench --package renderer --bench render_benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid_mapper::TemperatureGridMapper;
use heatmap_common::{ChartLayout, LegendConfig, Palette};
use renderer::{rasterize, render_svg, SvgOptions};
use test_utils::generate_dataset;

fn bench_svg(c: &mut Criterion) {
    let mapper = TemperatureGridMapper::new(10, ChartLayout::default()).unwrap();
    let model = mapper.map(&generate_dataset(1753, 2015, 0.005)).unwrap();
    let palette = Palette::reference();
    let legend = LegendConfig::default();
    let options = SvgOptions::default();

    c.bench_function("render_svg_full_dataset", |b| {
        b.iter(|| render_svg(black_box(&model), &palette, &legend, &options).unwrap())
    });

    let svg = render_svg(&model, &palette, &legend, &options).unwrap();
    let mut group = c.benchmark_group("rasterize");
    group.sample_size(10);
    group.bench_function("full_dataset_1x", |b| {
        b.iter(|| rasterize(black_box(&svg), 1.0).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_svg);
criterion_main!(benches);
