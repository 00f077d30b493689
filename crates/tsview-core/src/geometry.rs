// File: crates/tsview-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub const fn is_empty(&self) -> bool { self.width() <= 0 || self.height() <= 0 }

    /// Shrink symmetrically by `by` pixels on every side.
    /// Collapses to a zero-size rect at the center instead of inverting.
    pub fn shrink(&self, by: i32) -> Self {
        let by = by.max(0);
        let max_x = self.width().max(0) / 2;
        let max_y = self.height().max(0) / 2;
        let dx = by.min(max_x);
        let dy = by.min(max_y);
        Self::from_ltrb(self.left + dx, self.top + dy, self.right - dx, self.bottom - dy)
    }

    /// Rect of `width` x `height` centered inside `self`, clipped to it.
    pub fn centered(&self, width: i32, height: i32) -> Self {
        let w = width.clamp(0, self.width().max(0));
        let h = height.clamp(0, self.height().max(0));
        let left = self.left + (self.width() - w) / 2;
        let top = self.top + (self.height() - h) / 2;
        Self::from_ltwh(left, top, w, h)
    }

    /// Translate so that (0, 0) maps to this rect's top-left corner.
    pub const fn offset(&self, (x, y): (i32, i32)) -> (i32, i32) {
        (self.left + x, self.top + y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_composes() {
        let outer = RectI32::from_ltwh(0, 0, 100, 60);
        let once = outer.shrink(2);
        assert_eq!(once, RectI32::from_ltrb(2, 2, 98, 58));
        assert_eq!(once.shrink(3), outer.shrink(5));
    }

    #[test]
    fn shrink_never_inverts() {
        let r = RectI32::from_ltwh(10, 10, 4, 4).shrink(10);
        assert!(r.width() >= 0 && r.height() >= 0);
        assert!(r.is_empty());
    }

    #[test]
    fn centered_fits_inside() {
        let outer = RectI32::from_ltwh(0, 0, 200, 100);
        let c = outer.centered(50, 20);
        assert_eq!(c, RectI32::from_ltwh(75, 40, 50, 20));
        let big = outer.centered(500, 500);
        assert_eq!(big, outer);
    }
}
