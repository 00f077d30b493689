// File: crates/tsview-render-skia/tests/raster.rs
// Purpose: Validate RGBA buffer shape, background color and PNG output.

use tsview_core::{Command, Session, TimeTable, ViewerConfig};
use tsview_render_skia::{render_to_png, render_to_rgba8, Rasterizer};

fn session() -> Session {
    let time: Vec<i64> = (0..100).map(|i| i * 1_000_000).collect();
    let v: Vec<f64> = (0..100).map(|i| i as f64).collect();
    let table = TimeTable::new(time, vec![("v".to_string(), v)]).expect("table");
    let cfg = ViewerConfig { plot_width: 200, plot_height: 100, ..ViewerConfig::default() };
    Session::new(table, &cfg).expect("session")
}

#[test]
fn rgba_buffer_matches_frame_size() {
    let s = session();
    let frame = render_to_rgba8(&s).expect("rgba render");
    let (w, h) = s.frame_size();
    assert_eq!((frame.width, frame.height), (w as u32, h as u32));
    assert_eq!(frame.pixels.len(), w as usize * h as usize * 4);
    assert_eq!(frame.stride, w as usize * 4);

    // top-left corner is margin: theme background, opaque
    let (r, g, b) = s.theme().background_color().rgb();
    assert_eq!(frame.pixel(0, 0), Some([r, g, b, 255]));
    assert_eq!(frame.to_xrgb()[0], s.theme().background_color().0);
}

#[test]
fn theme_change_changes_background() {
    let mut s = session();
    let before = render_to_rgba8(&s).expect("render").pixel(0, 0);
    s.apply(Command::ToggleOverlay);
    s.apply(Command::ZoomIn);
    s.apply(Command::Confirm);
    let after = render_to_rgba8(&s).expect("render").pixel(0, 0);
    assert_ne!(before, after);
}

#[test]
fn png_written_to_disk() {
    let out = std::path::PathBuf::from("target/test_out/raster.png");
    render_to_png(&session(), &out).expect("render should succeed");
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn rasterizer_rejects_empty_surface() {
    assert!(Rasterizer::new(0, 10).is_err());
    let mut r = Rasterizer::new(10, 10).expect("raster");
    r.resize(20, 5).expect("resize");
    assert_eq!(r.size(), (20, 5));
}
