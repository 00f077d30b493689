// File: crates/tsview-render-skia/benches/raster_bench.rs
// Summary: Criterion benchmarks for Skia CPU rasterization of a complete frame.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tsview_core::{Session, TimeTable, ViewerConfig};
use tsview_render_skia::Rasterizer;

fn build_session(n: usize) -> Session {
    let time: Vec<i64> = (0..n as i64).map(|i| i * 60_000_000).collect();
    let y: Vec<f64> = (0..n).map(|i| (i as f64 * 0.01).sin() * 10.0 + (i as f64 * 0.0001)).collect();
    let table = TimeTable::new(time, vec![("Y".to_string(), y)]).expect("table");
    let cfg = ViewerConfig { plot_width: 800, plot_height: 500, ..ViewerConfig::default() };
    Session::new(table, &cfg).expect("session")
}

fn bench_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster_frame");
    for &n in &[10_000usize, 1_000_000usize] {
        group.bench_function(format!("rows_{n}"), |b| {
            let session = build_session(n);
            let (w, h) = session.frame_size();
            let mut raster = Rasterizer::new(w, h).expect("raster");
            b.iter(|| black_box(raster.render(&session)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_raster);
criterion_main!(benches);
