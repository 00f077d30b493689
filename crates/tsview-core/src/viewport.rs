// File: crates/tsview-core/src/viewport.rs
// Summary: Data-space window (time horizontally, value vertically) with pan/zoom.

use tracing::warn;

use crate::table::TimeTable;
use crate::types::guarded_span;

/// Visible data-space window.
///
/// `left`/`right` are on the time axis, `bottom`/`top` on the value axis.
/// Only the horizontal bounds move under pan/zoom; the vertical bounds are
/// fixed when the viewport is built from a table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Viewport {
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self { left, right, bottom, top }
    }

    /// Full time extent of `table` and global min/max over `columns`.
    /// Returns `None` when the table is empty or a column is unknown.
    pub fn fit(table: &TimeTable, columns: &[String]) -> Option<Self> {
        let (left, right) = table.time_extent()?;
        let (bottom, top) = table.value_range(columns)?;
        Some(Self { left: left as f64, right: right as f64, bottom, top })
    }

    /// Translate both horizontal bounds by `shift` data units.
    pub fn pan(&mut self, shift: f64) {
        self.left += shift;
        self.right += shift;
    }

    /// Rescale the horizontal half-width around the center.
    /// `factor < 1` zooms in, `factor > 1` zooms out; non-positive factors are ignored.
    /// A zoom that would overflow or collapse the window (`right <= left`) leaves it unchanged.
    pub fn zoom(&mut self, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            warn!(factor, "ignoring non-positive zoom factor");
            return;
        }
        if factor == 1.0 {
            return;
        }
        let center = self.left / 2.0 + self.right / 2.0;
        let half = self.width() / 2.0 * factor;
        let (left, right) = (center - half, center + half);
        if !(right > left && (right - left).is_finite()) {
            warn!(factor, left = self.left, right = self.right, "zoom limit reached");
            return;
        }
        self.left = left;
        self.right = right;
    }

    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.top - self.bottom }

    /// Width with the degenerate-range guard applied.
    pub fn safe_width(&self) -> f64 { guarded_span(self.left, self.right) }
    /// Height with the degenerate-range guard applied.
    pub fn safe_height(&self) -> f64 { guarded_span(self.bottom, self.top) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_one_is_exact_noop() {
        let mut v = Viewport::new(0.1, 0.7, 0.0, 1.0);
        let before = v;
        v.zoom(1.0);
        assert_eq!(v, before);
    }

    #[test]
    fn zoom_keeps_center() {
        let mut v = Viewport::new(10.0, 30.0, 0.0, 1.0);
        v.zoom(0.5);
        assert_eq!((v.left, v.right), (15.0, 25.0));
        v.zoom(4.0);
        assert_eq!((v.left, v.right), (0.0, 40.0));
        assert_eq!((v.bottom, v.top), (0.0, 1.0));
    }

    #[test]
    fn invalid_zoom_is_ignored() {
        let mut v = Viewport::new(0.0, 8.0, 0.0, 1.0);
        v.zoom(0.0);
        v.zoom(-2.0);
        v.zoom(f64::NAN);
        assert_eq!((v.left, v.right), (0.0, 8.0));
    }

    #[test]
    fn zoom_stops_at_float_limits() {
        let mut v = Viewport::new(0.0, 1e300, 0.0, 1.0);
        for _ in 0..40 {
            v.zoom(2.0);
        }
        assert!(v.left.is_finite() && v.right.is_finite());
        assert!(v.right > v.left);
        v.zoom(0.5);
        assert!(v.width().is_finite());

        let mut v = Viewport::new(1.6725e15, 1.6726e15, 0.0, 1.0);
        for _ in 0..200 {
            v.zoom(0.5);
        }
        assert!(v.right > v.left);
        let narrow = v.width();
        v.zoom(2.0);
        assert!(v.width() > narrow);
    }

    #[test]
    fn degenerate_spans_are_guarded() {
        let v = Viewport::new(5.0, 5.0, 3.0, 3.0);
        assert_eq!(v.width(), 0.0);
        assert!(v.safe_width() > 0.0);
        assert!(v.safe_height() > 0.0);
    }
}
