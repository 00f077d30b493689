// File: crates/tsview-core/src/scale.rs
// Summary: Affine data-to-pixel maps for the time (X) and value (Y) axes.

use tracing::warn;

use crate::viewport::Viewport;

/// Round and clamp a pixel coordinate into `i32` range; NaN maps to 0.
#[inline]
pub fn to_pixel(v: f64) -> i32 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

/// Horizontal map `[left, right] -> [0, width]`.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left: f64,
    pub span: f64,
    pub width: i32,
}

impl TimeScale {
    pub fn new(view: &Viewport, width: i32) -> Self {
        if !(view.width() > 0.0) {
            warn!(left = view.left, right = view.right, "degenerate time range; using minimum span");
        }
        Self { left: view.left, span: view.safe_width(), width }
    }

    /// Fractional pixel position, unclamped.
    #[inline]
    pub fn to_px_f(&self, t: f64) -> f64 {
        (t - self.left) / self.span * self.width as f64
    }

    /// Pixel column for `t`, rounded.
    #[inline]
    pub fn to_px(&self, t: f64) -> i32 {
        to_pixel(self.to_px_f(t))
    }

    /// Pixel column clamped to the bucket range `[0, width - 1]`.
    #[inline]
    pub fn to_column(&self, t: f64) -> i32 {
        self.to_px(t).clamp(0, (self.width - 1).max(0))
    }
}

/// Vertical map `[bottom, top] -> [height, 0]` (pixel row 0 is the top edge).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub bottom: f64,
    pub span: f64,
    pub height: i32,
}

impl ValueScale {
    pub fn new(view: &Viewport, height: i32) -> Self {
        if !(view.height() > 0.0) {
            warn!(bottom = view.bottom, top = view.top, "degenerate value range; using minimum span");
        }
        Self { bottom: view.bottom, span: view.safe_height(), height }
    }

    #[inline]
    pub fn to_px_f(&self, v: f64) -> f64 {
        self.height as f64 - (v - self.bottom) / self.span * self.height as f64
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> i32 {
        to_pixel(self.to_px_f(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_scale_maps_ends() {
        let v = Viewport::new(100.0, 200.0, 0.0, 1.0);
        let s = TimeScale::new(&v, 50);
        assert_eq!(s.to_px(100.0), 0);
        assert_eq!(s.to_px(200.0), 50);
        assert_eq!(s.to_column(200.0), 49);
        assert_eq!(s.to_column(-1e30), 0);
        assert_eq!(s.to_px(150.0), 25);
    }

    #[test]
    fn value_scale_is_inverted() {
        let v = Viewport::new(0.0, 1.0, 10.0, 20.0);
        let s = ValueScale::new(&v, 100);
        assert_eq!(s.to_px(10.0), 100);
        assert_eq!(s.to_px(20.0), 0);
        assert_eq!(s.to_px(15.0), 50);
    }

    #[test]
    fn degenerate_ranges_do_not_fault() {
        let v = Viewport::new(5.0, 5.0, 2.0, 2.0);
        let ts = TimeScale::new(&v, 10);
        let vs = ValueScale::new(&v, 10);
        assert_eq!(ts.to_px(5.0), 0);
        assert_eq!(vs.to_px(2.0), 10);
        assert_eq!(to_pixel(f64::NAN), 0);
        assert_eq!(to_pixel(1e300), i32::MAX);
    }
}
