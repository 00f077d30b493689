// File: crates/tsview-core/benches/resample_bench.rs
// Summary: Criterion benchmarks for per-pixel resampling over growing tables.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tsview_core::{resample, TimeTable, Viewport};

fn gen_table(n: usize, columns: usize) -> TimeTable {
    let time: Vec<i64> = (0..n as i64).map(|i| 1_672_531_200_000_000 + i * 60_000_000).collect();
    let cols = (0..columns)
        .map(|c| {
            let mut y = 100.0f64;
            let data = (0..n)
                .map(|i| {
                    // simple waveform with drift
                    y += ((i + c * 31) as f64 * 0.01).sin() * 0.05;
                    y
                })
                .collect();
            (format!("S{c}"), data)
        })
        .collect();
    TimeTable::new(time, cols).expect("table")
}

fn bench_resample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample");
    for &n in &[100_000usize, 1_000_000usize] {
        let table = gen_table(n, 5);
        let columns: Vec<usize> = (0..5).collect();
        let names: Vec<String> = table.names().to_vec();
        let view = Viewport::fit(&table, &names).expect("viewport");
        for &width in &[1_000i32, 2_000i32] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_w{width}")), &width, |b, &w| {
                b.iter(|| black_box(resample(&table, &view, &columns, w, 1_000)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_resample);
criterion_main!(benches);
