// File: crates/tsview-render-skia/src/target.rs
// Summary: RenderTarget implementation drawing onto a Skia canvas.

use skia_safe as skia;

use tsview_core::types::PixelPoint;
use tsview_core::{RectI32, RenderTarget, Rgb};

use crate::text::{to_skia, TextShaper};

pub struct SkiaTarget<'a> {
    canvas: &'a skia::Canvas,
    shaper: &'a TextShaper,
    width: i32,
    height: i32,
    /// Save count to restore when the active clip is cleared.
    clip_save: Option<usize>,
}

impl<'a> SkiaTarget<'a> {
    pub fn new(canvas: &'a skia::Canvas, shaper: &'a TextShaper, width: i32, height: i32) -> Self {
        Self { canvas, shaper, width, height, clip_save: None }
    }

    fn stroke(color: Rgb, width: f32) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(width);
        paint
    }
}

fn rect(r: RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

/// Pixel centers, so 1px lines land on a single row/column.
fn center((x, y): PixelPoint) -> (f32, f32) {
    (x as f32 + 0.5, y as f32 + 0.5)
}

impl RenderTarget for SkiaTarget<'_> {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }

    fn fill_rect(&mut self, r: RectI32, color: Rgb) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_style(skia::paint::Style::Fill);
        self.canvas.draw_rect(rect(r), &paint);
    }

    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Rgb, width: f32) {
        self.canvas.draw_line(center(from), center(to), &Self::stroke(color, width));
    }

    fn draw_polyline(&mut self, points: &[PixelPoint], color: Rgb, width: f32) {
        let Some((&first, rest)) = points.split_first() else { return };
        let mut path = skia::Path::new();
        path.move_to(center(first));
        for &p in rest {
            path.line_to(center(p));
        }
        self.canvas.draw_path(&path, &Self::stroke(color, width));
    }

    fn draw_text(&mut self, text: &str, (x, y): PixelPoint, size: f32, color: Rgb) {
        self.shaper.draw(self.canvas, text, x as f32, y as f32, size, color);
    }

    fn measure_text(&self, text: &str, size: f32) -> (i32, i32) {
        self.shaper.measure(text, size)
    }

    fn set_clip(&mut self, clip: Option<RectI32>) {
        if let Some(count) = self.clip_save.take() {
            self.canvas.restore_to_count(count);
        }
        if let Some(r) = clip {
            self.clip_save = Some(self.canvas.save());
            self.canvas.clip_rect(rect(r), skia::ClipOp::Intersect, false);
        }
    }
}

impl Drop for SkiaTarget<'_> {
    fn drop(&mut self) {
        if let Some(count) = self.clip_save.take() {
            self.canvas.restore_to_count(count);
        }
    }
}
