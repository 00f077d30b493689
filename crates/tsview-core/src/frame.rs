// File: crates/tsview-core/src/frame.rs
// Summary: Frame composition: background, bordered plot panel, grid + labels, series polylines, legend, overlay.

use tracing::debug;

use crate::axis::Axis;
use crate::config::ViewerConfig;
use crate::error::{ViewerError, ViewerResult};
use crate::geometry::RectI32;
use crate::grid::{compute_grid_lines, GridLines};
use crate::render::RenderTarget;
use crate::resample::{resample, ReducedSeries};
use crate::scale::{TimeScale, ValueScale};
use crate::table::TimeTable;
use crate::theme::Theme;
use crate::types::Insets;
use crate::viewport::Viewport;
use crate::widget::{Legend, LinePlot, Panel, SelectList, TextBlock, Widget};

/// Pixel geometry and feature switches for a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameLayout {
    pub plot_width: i32,
    pub plot_height: i32,
    pub insets: Insets,
    pub border: i32,
    pub font_size: f32,
    pub stroke_width: f32,
    pub grid: bool,
    pub legend: bool,
}

impl From<&ViewerConfig> for FrameLayout {
    fn from(cfg: &ViewerConfig) -> Self {
        Self {
            plot_width: cfg.plot_width,
            plot_height: cfg.plot_height,
            insets: cfg.insets,
            border: cfg.border,
            font_size: cfg.font_size,
            stroke_width: cfg.stroke_width,
            grid: cfg.grid,
            legend: cfg.legend,
        }
    }
}

impl Default for FrameLayout {
    fn default() -> Self { Self::from(&ViewerConfig::default()) }
}

impl FrameLayout {
    /// Plot content rectangle in surface pixels.
    pub fn content(&self) -> RectI32 {
        RectI32::from_ltwh(
            self.insets.left as i32 + self.border,
            self.insets.top as i32 + self.border,
            self.plot_width,
            self.plot_height,
        )
    }

    /// Surface size needed for the whole frame.
    pub fn frame_size(&self) -> (i32, i32) {
        (
            self.plot_width + 2 * self.border + self.insets.hsum() as i32,
            self.plot_height + 2 * self.border + self.insets.vsum() as i32,
        )
    }
}

/// Modal list of theme names drawn on top of the frame.
#[derive(Clone, Debug)]
pub struct ThemePicker {
    pub names: Vec<String>,
    pub selected: usize,
}

/// What a frame ended up drawing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub series_drawn: usize,
    pub series_skipped: usize,
    pub points: usize,
    pub grid_columns: usize,
    pub grid_rows: usize,
}

/// Composes one frame from a table, the selected columns and a viewport.
pub struct FrameRenderer {
    table: TimeTable,
    columns: Vec<usize>,
    layout: FrameLayout,
    x_axis: Axis,
    y_axis: Axis,
}

impl FrameRenderer {
    /// Fails when a selected column does not exist or the table has no rows.
    pub fn new(table: TimeTable, selection: &[String], layout: FrameLayout) -> ViewerResult<Self> {
        if table.is_empty() {
            return Err(ViewerError::EmptyTable);
        }
        let columns = table.resolve(selection)?;
        Ok(Self { table, columns, layout, x_axis: Axis::time(), y_axis: Axis::value() })
    }

    pub fn table(&self) -> &TimeTable { &self.table }
    pub fn layout(&self) -> &FrameLayout { &self.layout }
    pub fn columns(&self) -> &[usize] { &self.columns }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|&c| self.table.names()[c].clone()).collect()
    }

    /// Initial viewport: full time extent, global min/max of the selected columns.
    pub fn initial_viewport(&self) -> ViewerResult<Viewport> {
        Viewport::fit(&self.table, &self.column_names()).ok_or(ViewerError::EmptyTable)
    }

    /// Reduced series for `view`, in plot-local pixels.
    pub fn reduce(&self, view: &Viewport) -> Vec<ReducedSeries> {
        resample(&self.table, view, &self.columns, self.layout.plot_width, self.layout.plot_height)
    }

    /// Draw a complete frame. All series are reduced before the first draw call.
    pub fn render(
        &self,
        view: &Viewport,
        theme: &Theme,
        overlay: Option<&ThemePicker>,
        target: &mut dyn RenderTarget,
    ) -> FrameStats {
        let (w, h) = target.size();
        let layout = &self.layout;
        let content = layout.content();
        let series = self.reduce(view);
        let grid: Option<GridLines> = layout.grid.then(|| compute_grid_lines(view));

        target.fill_rect(RectI32::from_ltwh(0, 0, w, h), theme.background_color());
        let panel = Panel::new(theme.panel_color(), theme.border_color(), layout.border);
        panel.render(panel.outer(content), target);

        let plot = LinePlot {
            grid: grid.as_ref(),
            x_scale: TimeScale::new(view, content.width()),
            y_scale: ValueScale::new(view, content.height()),
            series: &series,
            colors: theme.accent_palette(),
            grid_color: theme.grid_line_color(),
            stroke_width: layout.stroke_width,
        };
        plot.render(content, target);

        let mut stats = FrameStats::default();
        if let Some(g) = grid.as_ref() {
            let cols = plot.grid_columns();
            let rows = plot.grid_rows();
            self.draw_tick_labels(&cols, &rows, g, content, theme, target);
            stats.grid_columns = cols.len();
            stats.grid_rows = rows.len();
        }
        for s in &series {
            if s.is_drawable() {
                stats.series_drawn += 1;
                stats.points += s.points.len();
            } else {
                stats.series_skipped += 1;
            }
        }

        if layout.legend {
            let legend = Legend {
                entries: series.iter().map(|s| (s.name.clone(), theme.accent(s.slot))).collect(),
                size: layout.font_size,
                color: theme.text_color(),
            };
            let left = content.right + layout.border + 10;
            let bottom = (content.top + legend.height()).min(content.bottom);
            legend.render(RectI32::from_ltrb(left, content.top, w, bottom), target);
        }

        if let Some(picker) = overlay {
            draw_overlay(picker, RectI32::from_ltwh(0, 0, w, h), layout, theme, target);
        }
        debug!(?stats, "frame rendered");
        stats
    }

    fn draw_tick_labels(
        &self,
        cols: &[(f64, i32)],
        rows: &[(f64, i32)],
        grid: &GridLines,
        content: RectI32,
        theme: &Theme,
        target: &mut dyn RenderTarget,
    ) {
        let size = self.layout.font_size;
        let gap = self.layout.border + 6;
        for &(t, x) in cols {
            let text = self.x_axis.format_tick(t, grid.x_step);
            let (tw, _) = target.measure_text(&text, size);
            target.draw_text(&text, (content.left + x - tw / 2, content.bottom + gap), size, theme.text_color());
        }
        for &(v, y) in rows {
            let text = self.y_axis.format_tick(v, grid.y_step);
            let (tw, th) = target.measure_text(&text, size);
            target.draw_text(&text, (content.left - gap - tw, content.top + y - th / 2), size, theme.text_color());
        }
    }
}

/// Centered picker: outer bordered panel, nested inner panel, title and list.
fn draw_overlay(picker: &ThemePicker, frame: RectI32, layout: &FrameLayout, theme: &Theme, target: &mut dyn RenderTarget) {
    let size = layout.font_size;
    let title = TextBlock::new("Select theme (Enter to apply)", size, theme.highlight_text_color());
    let list = SelectList {
        items: picker.names.clone(),
        selected: picker.selected,
        size,
        color: theme.text_color(),
        highlight_fill: theme.accent(picker.selected),
        highlight_color: theme.panel_color(),
    };
    let text_w = title
        .lines
        .iter()
        .chain(list.items.iter())
        .map(|s| target.measure_text(s, size).0)
        .max()
        .unwrap_or(0);
    let outer = Panel::new(theme.panel_color(), theme.border_color(), layout.border.max(1));
    let inner = Panel::new(theme.panel_color(), theme.grid_line_color(), 1);
    let pad = 8;
    let content_w = text_w + 4 * pad;
    let content_h = title.height() + list.height() + 2 * pad;
    let chrome = 2 * (outer.thickness + inner.thickness + pad);
    let area = frame.centered(content_w + chrome, content_h + chrome);

    outer.render(area, target);
    let nested = outer.inner(area).shrink(pad);
    inner.render(nested, target);
    let body = inner.inner(nested).shrink(pad);
    title.render(body, target);
    let list_area = RectI32::from_ltrb(body.left, body.top + title.height(), body.right, body.bottom);
    list.render(list_area, target);
}
