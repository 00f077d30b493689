// File: crates/tsview-core/src/session.rs
// Summary: Interactive state carried across frames: viewport, active theme, overlay mode.

use tracing::{info, warn};

use crate::config::ViewerConfig;
use crate::error::ViewerResult;
use crate::frame::{FrameLayout, FrameRenderer, FrameStats, ThemePicker};
use crate::input::Command;
use crate::render::RenderTarget;
use crate::table::TimeTable;
use crate::theme::{self, Theme};
use crate::viewport::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Theme picker open with `selected` highlighted.
    Overlay { selected: usize },
}

/// Effect of applying a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Redraw,
    Quit,
}

pub struct Session {
    renderer: FrameRenderer,
    viewport: Viewport,
    themes: Vec<Theme>,
    active: usize,
    mode: Mode,
    pan_fraction: f64,
    zoom_in_factor: f64,
    zoom_out_factor: f64,
}

impl Session {
    /// Validate `config`, resolve the selected columns and fit the viewport to the data.
    pub fn new(table: TimeTable, config: &ViewerConfig) -> ViewerResult<Self> {
        config.validate()?;
        let renderer = FrameRenderer::new(table, &config.columns, FrameLayout::from(config))?;
        let viewport = renderer.initial_viewport()?;
        let themes = theme::presets();
        let active = theme::position(&themes, &config.theme).unwrap_or_else(|| {
            warn!(theme = %config.theme, fallback = themes[0].name, "unknown theme");
            0
        });
        Ok(Self {
            renderer,
            viewport,
            themes,
            active,
            mode: Mode::Normal,
            pan_fraction: config.pan_fraction,
            zoom_in_factor: config.zoom_in_factor,
            zoom_out_factor: config.zoom_out_factor,
        })
    }

    pub fn viewport(&self) -> &Viewport { &self.viewport }
    pub fn mode(&self) -> Mode { self.mode }
    pub fn theme(&self) -> &Theme { &self.themes[self.active] }
    pub fn themes(&self) -> &[Theme] { &self.themes }
    pub fn renderer(&self) -> &FrameRenderer { &self.renderer }
    pub fn frame_size(&self) -> (i32, i32) { self.renderer.layout().frame_size() }

    pub fn apply(&mut self, cmd: Command) -> Outcome {
        match (self.mode, cmd) {
            (_, Command::Quit) => Outcome::Quit,
            (Mode::Normal, Command::PanLeft) => {
                self.viewport.pan(-self.viewport.width() * self.pan_fraction);
                Outcome::Redraw
            }
            (Mode::Normal, Command::PanRight) => {
                self.viewport.pan(self.viewport.width() * self.pan_fraction);
                Outcome::Redraw
            }
            (Mode::Normal, Command::ZoomIn) => {
                self.viewport.zoom(self.zoom_in_factor);
                Outcome::Redraw
            }
            (Mode::Normal, Command::ZoomOut) => {
                self.viewport.zoom(self.zoom_out_factor);
                Outcome::Redraw
            }
            (Mode::Normal, Command::ToggleOverlay) => {
                info!("theme picker opened");
                self.mode = Mode::Overlay { selected: self.active };
                Outcome::Redraw
            }
            (Mode::Normal, Command::Confirm) => Outcome::Unchanged,
            (Mode::Overlay { selected }, Command::ZoomIn) => {
                self.mode = Mode::Overlay { selected: (selected + 1) % self.themes.len() };
                Outcome::Redraw
            }
            (Mode::Overlay { selected }, Command::ZoomOut) => {
                let n = self.themes.len();
                self.mode = Mode::Overlay { selected: (selected + n - 1) % n };
                Outcome::Redraw
            }
            (Mode::Overlay { .. }, Command::ToggleOverlay) => {
                info!("theme picker closed without change");
                self.mode = Mode::Normal;
                Outcome::Redraw
            }
            (Mode::Overlay { selected }, Command::Confirm) => {
                self.active = selected;
                self.mode = Mode::Normal;
                info!(theme = self.themes[selected].name, "theme applied");
                Outcome::Redraw
            }
            (Mode::Overlay { .. }, Command::PanLeft | Command::PanRight) => Outcome::Unchanged,
        }
    }

    fn picker(&self) -> Option<ThemePicker> {
        match self.mode {
            Mode::Normal => None,
            Mode::Overlay { selected } => Some(ThemePicker {
                names: self.themes.iter().map(|t| t.name.to_string()).collect(),
                selected,
            }),
        }
    }

    /// Draw the current state; the overlay, if open, is composited last.
    pub fn render(&self, target: &mut dyn RenderTarget) -> FrameStats {
        let picker = self.picker();
        self.renderer.render(&self.viewport, self.theme(), picker.as_ref(), target)
    }
}
