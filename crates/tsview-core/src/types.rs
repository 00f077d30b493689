// File: crates/tsview-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, axis guards).

use serde::{Deserialize, Serialize};

/// Default plot area width in pixels.
pub const WIDTH: i32 = 2000;
/// Default plot area height in pixels.
pub const HEIGHT: i32 = 1000;

/// Smallest axis span used when a viewport range collapses to zero or below.
pub const MIN_AXIS_RANGE: f64 = 1e-9;

/// Screen-space point in whole pixels.
pub type PixelPoint = (i32, i32);

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same margin on every side.
    pub const fn uniform(v: u32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    /// Room for value labels on the left, time labels below and the legend on the right.
    fn default() -> Self {
        Self::new(80, 160, 50, 60)
    }
}

/// Span of `(lo, hi)`, or `MIN_AXIS_RANGE` when the span is non-positive or not finite.
#[inline]
pub fn guarded_span(lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    if span.is_finite() && span > 0.0 { span } else { MIN_AXIS_RANGE }
}
