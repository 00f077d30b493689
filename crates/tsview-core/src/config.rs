// File: crates/tsview-core/src/config.rs
// Summary: Viewer configuration (serde, JSON file) and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};
use crate::frame::FrameLayout;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Serializable viewer setup. Every field has a default so partial JSON files work.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Plot content width in pixels (excludes margins and border).
    pub plot_width: i32,
    pub plot_height: i32,
    pub insets: Insets,
    pub border: i32,
    /// Columns to display; empty means every value column.
    pub columns: Vec<String>,
    pub theme: String,
    pub grid: bool,
    pub legend: bool,
    pub font_size: f32,
    pub stroke_width: f32,
    pub fps_cap: u32,
    /// Pan step as a fraction of the visible width.
    pub pan_fraction: f64,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            plot_width: WIDTH,
            plot_height: HEIGHT,
            insets: Insets::default(),
            border: 2,
            columns: Vec::new(),
            theme: "onehalfdark".to_string(),
            grid: true,
            legend: true,
            font_size: 12.0,
            stroke_width: 2.0,
            fps_cap: 100,
            pan_fraction: 0.5,
            zoom_in_factor: 0.5,
            zoom_out_factor: 2.0,
        }
    }
}

impl ViewerConfig {
    pub fn from_json_str(s: &str) -> ViewerResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> ViewerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> ViewerResult<()> {
        let bad = |msg: String| Err(ViewerError::InvalidConfig(msg));
        if self.plot_width < 2 || self.plot_height < 2 {
            return bad(format!("plot size must be at least 2x2, got {}x{}", self.plot_width, self.plot_height));
        }
        if self.border < 0 {
            return bad(format!("border must be non-negative, got {}", self.border));
        }
        if !(self.font_size > 0.0) || !(self.stroke_width > 0.0) {
            return bad("font_size and stroke_width must be positive".to_string());
        }
        if self.fps_cap == 0 {
            return bad("fps_cap must be positive".to_string());
        }
        for (name, v) in [
            ("pan_fraction", self.pan_fraction),
            ("zoom_in_factor", self.zoom_in_factor),
            ("zoom_out_factor", self.zoom_out_factor),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return bad(format!("{name} must be a positive number, got {v}"));
            }
        }
        Ok(())
    }

    /// Full surface size: plot + border + margins.
    pub fn frame_size(&self) -> (i32, i32) {
        FrameLayout::from(self).frame_size()
    }
}
