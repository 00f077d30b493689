// File: crates/tsview-core/src/lib.rs
// Summary: Core library entry point; viewport-to-pixel pipeline for multi-series time-series viewing.

pub mod axis;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod grid;
pub mod input;
pub mod render;
pub mod resample;
pub mod scale;
pub mod session;
pub mod table;
pub mod telemetry;
pub mod theme;
pub mod types;
pub mod viewport;
pub mod widget;

pub use config::ViewerConfig;
pub use error::{ViewerError, ViewerResult};
pub use frame::{FrameLayout, FrameRenderer, FrameStats, ThemePicker};
pub use geometry::RectI32;
pub use grid::{compute_grid_lines, nice_interval, GridLines};
pub use input::{command_for_key, Command, InputController, Key};
pub use render::{DrawCommand, DrawList, RenderTarget};
pub use resample::{aggregate, resample, ReducedSeries};
pub use session::{Mode, Outcome, Session};
pub use table::TimeTable;
pub use theme::{Rgb, Theme};
pub use viewport::Viewport;
pub use widget::{Legend, LinePlot, Panel, SelectList, TextBlock, Widget};
