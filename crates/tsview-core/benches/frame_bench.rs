// File: crates/tsview-core/benches/frame_bench.rs
// Summary: Criterion benchmarks for full frame composition into a recording target.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tsview_core::{Command, DrawList, Session, TimeTable, ViewerConfig};

fn build_session(n: usize) -> Session {
    let time: Vec<i64> = (0..n as i64).map(|i| i * 60_000_000).collect();
    let a: Vec<f64> = (0..n).map(|i| (i as f64 * 0.001).sin() * 10.0).collect();
    let b: Vec<f64> = (0..n).map(|i| (i as f64 * 0.0007).cos() * 8.0).collect();
    let table = TimeTable::new(time, vec![("A".to_string(), a), ("B".to_string(), b)]).expect("table");
    Session::new(table, &ViewerConfig::default()).expect("session")
}

fn bench_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_draw_list");
    for &n in &[100_000usize, 1_000_000usize] {
        group.bench_function(format!("rows_{n}"), |b| {
            let mut session = build_session(n);
            session.apply(Command::ZoomIn);
            let (w, h) = session.frame_size();
            b.iter(|| {
                let mut dl = DrawList::new(w, h);
                black_box(session.render(&mut dl));
                black_box(dl.commands.len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_frame);
criterion_main!(benches);
