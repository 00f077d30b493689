// File: crates/tsview-core/src/render.rs
// Summary: Render-target contract consumed by the frame renderer, plus a recording target.

use crate::geometry::RectI32;
use crate::theme::Rgb;
use crate::types::PixelPoint;

/// Rectangular pixel surface the frame is drawn onto.
///
/// Coordinates are surface pixels with (0, 0) at the top-left corner.
/// Text is positioned by its top-left corner.
pub trait RenderTarget {
    fn size(&self) -> (i32, i32);
    fn fill_rect(&mut self, rect: RectI32, color: Rgb);
    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Rgb, width: f32);
    fn draw_polyline(&mut self, points: &[PixelPoint], color: Rgb, width: f32);
    fn draw_text(&mut self, text: &str, at: PixelPoint, size: f32, color: Rgb);
    /// Pixel width and height of `text` at `size`.
    fn measure_text(&self, text: &str, size: f32) -> (i32, i32);
    /// Restrict subsequent drawing to `rect`; `None` clears the clip.
    fn set_clip(&mut self, rect: Option<RectI32>);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    FillRect { rect: RectI32, color: Rgb },
    Line { from: PixelPoint, to: PixelPoint, color: Rgb, width: f32 },
    Polyline { points: Vec<PixelPoint>, color: Rgb, width: f32 },
    Text { text: String, at: PixelPoint, size: f32, color: Rgb },
    Clip(Option<RectI32>),
}

/// Records draw commands instead of rasterizing them.
/// Text is measured as fixed-advance glyphs (0.6 em wide, 1 em tall).
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub width: i32,
    pub height: i32,
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[PixelPoint], Rgb)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { points, color, .. } => Some((points.as_slice(), *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (PixelPoint, PixelPoint, Rgb)> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            DrawCommand::Line { from, to, color, .. } => Some((from, to, color)),
            _ => None,
        })
    }
}

impl RenderTarget for DrawList {
    fn size(&self) -> (i32, i32) { (self.width, self.height) }

    fn fill_rect(&mut self, rect: RectI32, color: Rgb) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_line(&mut self, from: PixelPoint, to: PixelPoint, color: Rgb, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }

    fn draw_polyline(&mut self, points: &[PixelPoint], color: Rgb, width: f32) {
        self.commands.push(DrawCommand::Polyline { points: points.to_vec(), color, width });
    }

    fn draw_text(&mut self, text: &str, at: PixelPoint, size: f32, color: Rgb) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), at, size, color });
    }

    fn measure_text(&self, text: &str, size: f32) -> (i32, i32) {
        let w = (text.chars().count() as f32 * size * 0.6).ceil() as i32;
        (w, size.ceil() as i32)
    }

    fn set_clip(&mut self, rect: Option<RectI32>) {
        self.commands.push(DrawCommand::Clip(rect));
    }
}
