// File: crates/tsview-core/src/widget.rs
// Summary: Drawable widgets (bordered panel, text block, selectable list, legend, line plot).

use crate::geometry::RectI32;
use crate::grid::GridLines;
use crate::render::RenderTarget;
use crate::resample::ReducedSeries;
use crate::scale::{TimeScale, ValueScale};
use crate::theme::Rgb;

/// Anything that can draw itself into a rectangle of a render target.
pub trait Widget {
    fn render(&self, area: RectI32, target: &mut dyn RenderTarget);
}

/// Filled rectangle with a solid border of `thickness` pixels.
#[derive(Clone, Copy, Debug)]
pub struct Panel {
    pub fill: Rgb,
    pub border: Rgb,
    pub thickness: i32,
}

impl Panel {
    pub const fn new(fill: Rgb, border: Rgb, thickness: i32) -> Self {
        Self { fill, border, thickness }
    }

    /// Content rectangle left inside the border.
    pub fn inner(&self, area: RectI32) -> RectI32 {
        area.shrink(self.thickness)
    }

    /// Outer rectangle whose content rectangle is `content`.
    pub fn outer(&self, content: RectI32) -> RectI32 {
        let t = self.thickness.max(0);
        RectI32::from_ltrb(content.left - t, content.top - t, content.right + t, content.bottom + t)
    }
}

impl Widget for Panel {
    fn render(&self, area: RectI32, target: &mut dyn RenderTarget) {
        if area.is_empty() {
            return;
        }
        if self.thickness > 0 {
            target.fill_rect(area, self.border);
        }
        target.fill_rect(self.inner(area), self.fill);
    }
}

/// Lines of text stacked from the top-left corner of the area.
#[derive(Clone, Debug)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub size: f32,
    pub color: Rgb,
    pub line_gap: i32,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, size: f32, color: Rgb) -> Self {
        Self { lines: text.into().lines().map(str::to_string).collect(), size, color, line_gap: 4 }
    }

    pub fn line_height(&self) -> i32 { self.size.ceil() as i32 + self.line_gap }

    pub fn height(&self) -> i32 { self.line_height() * self.lines.len() as i32 }
}

impl Widget for TextBlock {
    fn render(&self, area: RectI32, target: &mut dyn RenderTarget) {
        let mut y = area.top;
        for line in &self.lines {
            if y + self.line_height() > area.bottom {
                break;
            }
            target.draw_text(line, (area.left, y), self.size, self.color);
            y += self.line_height();
        }
    }
}

/// Vertical list with one highlighted row.
#[derive(Clone, Debug)]
pub struct SelectList {
    pub items: Vec<String>,
    pub selected: usize,
    pub size: f32,
    pub color: Rgb,
    pub highlight_fill: Rgb,
    pub highlight_color: Rgb,
}

impl SelectList {
    pub fn row_height(&self) -> i32 { self.size.ceil() as i32 + 8 }
    pub fn height(&self) -> i32 { self.row_height() * self.items.len() as i32 }
}

impl Widget for SelectList {
    fn render(&self, area: RectI32, target: &mut dyn RenderTarget) {
        let rh = self.row_height();
        for (i, item) in self.items.iter().enumerate() {
            let top = area.top + i as i32 * rh;
            if top + rh > area.bottom {
                break;
            }
            let row = RectI32::from_ltrb(area.left, top, area.right, top + rh);
            let color = if i == self.selected {
                target.fill_rect(row, self.highlight_fill);
                self.highlight_color
            } else {
                self.color
            };
            let marker = if i == self.selected { "> " } else { "  " };
            target.draw_text(&format!("{marker}{item}"), (row.left + 4, row.top + 4), self.size, color);
        }
    }
}

/// One color swatch + label per series, stacked vertically.
#[derive(Clone, Debug)]
pub struct Legend {
    pub entries: Vec<(String, Rgb)>,
    pub size: f32,
    pub color: Rgb,
}

impl Legend {
    pub fn row_height(&self) -> i32 { self.size.ceil() as i32 + 5 }
    pub fn height(&self) -> i32 { self.row_height() * self.entries.len() as i32 }
}

impl Widget for Legend {
    fn render(&self, area: RectI32, target: &mut dyn RenderTarget) {
        let swatch = self.size.ceil() as i32;
        for (i, (label, color)) in self.entries.iter().enumerate() {
            let top = area.top + i as i32 * self.row_height();
            if top + swatch > area.bottom {
                break;
            }
            target.fill_rect(RectI32::from_ltwh(area.left, top, swatch, swatch), *color);
            target.draw_text(label, (area.left + swatch + 5, top), self.size, self.color);
        }
    }
}

/// Grid lines and reduced series inside the plot content rectangle.
/// Series points are in plot-local pixels; the area supplies the offset.
pub struct LinePlot<'a> {
    pub grid: Option<&'a GridLines>,
    pub x_scale: TimeScale,
    pub y_scale: ValueScale,
    pub series: &'a [ReducedSeries],
    pub colors: &'a [Rgb],
    pub grid_color: Rgb,
    pub stroke_width: f32,
}

impl LinePlot<'_> {
    /// Plot-local x of every vertical grid line that lands inside `[0, width]`.
    pub fn grid_columns(&self) -> Vec<(f64, i32)> {
        let Some(grid) = self.grid else { return Vec::new() };
        grid.x
            .iter()
            .map(|&t| (t, self.x_scale.to_px(t)))
            .filter(|&(_, px)| (0..=self.x_scale.width).contains(&px))
            .collect()
    }

    /// Plot-local y of every horizontal grid line that lands inside `[0, height]`.
    pub fn grid_rows(&self) -> Vec<(f64, i32)> {
        let Some(grid) = self.grid else { return Vec::new() };
        grid.y
            .iter()
            .map(|&v| (v, self.y_scale.to_px(v)))
            .filter(|&(_, py)| (0..=self.y_scale.height).contains(&py))
            .collect()
    }
}

impl Widget for LinePlot<'_> {
    fn render(&self, area: RectI32, target: &mut dyn RenderTarget) {
        target.set_clip(Some(area));
        for (_, x) in self.grid_columns() {
            target.draw_line(area.offset((x, 0)), area.offset((x, area.height())), self.grid_color, 1.0);
        }
        for (_, y) in self.grid_rows() {
            target.draw_line(area.offset((0, y)), area.offset((area.width(), y)), self.grid_color, 1.0);
        }
        for s in self.series.iter().filter(|s| s.is_drawable()) {
            let color = crate::theme::cyclic(self.colors, s.slot, self.grid_color);
            let pts: Vec<_> = s.points.iter().map(|&p| area.offset(p)).collect();
            target.draw_polyline(&pts, color, self.stroke_width);
        }
        target.set_clip(None);
    }
}
