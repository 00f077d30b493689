// File: crates/tsview-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders a deterministic small frame (grid and legend off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use tsview_core::{Command, Session, TimeTable, ViewerConfig};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn session() -> Session {
    let time: Vec<i64> = (0..500).collect();
    let a: Vec<f64> = (0..500).map(|i| (i as f64 * 0.03).sin()).collect();
    let b: Vec<f64> = (0..500).map(|i| (i as f64 * 0.011).cos() * 0.5).collect();
    let table = TimeTable::new(time, vec![("a".to_string(), a), ("b".to_string(), b)]).expect("table");
    let cfg = ViewerConfig {
        plot_width: 240,
        plot_height: 120,
        grid: false,
        legend: false,
        ..ViewerConfig::default()
    };
    Session::new(table, &cfg).expect("session")
}

#[test]
fn golden_two_series() {
    let bytes = tsview_render_skia::render_to_rgba8(&session()).expect("render").encode_png().expect("png");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/two_series.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_zoomed_in() {
    let mut s = session();
    s.apply(Command::ZoomIn);
    let bytes = tsview_render_skia::render_to_rgba8(&s).expect("render").encode_png().expect("png");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/zoomed_in.png");
    write_or_compare(&path, &bytes);
}
