// File: crates/tsview-core/src/grid.rs
// Summary: "Nice interval" tick planning for both viewport axes.

use crate::types::MIN_AXIS_RANGE;
use crate::viewport::Viewport;

/// Multipliers tried in order against the decade base.
const NICE_FACTORS: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// Target number of intervals across a range.
const TARGET_INTERVALS: f64 = 10.0;

/// Tick spacing from {1, 2, 5, 10} x 10^k for roughly ten intervals over `range_value`.
/// Non-positive or non-finite ranges are replaced by `MIN_AXIS_RANGE`.
pub fn nice_interval(range_value: f64) -> f64 {
    let range_value = if range_value.is_finite() && range_value > 0.0 { range_value } else { MIN_AXIS_RANGE };
    let raw = range_value / TARGET_INTERVALS;
    let base = 10f64.powf(raw.log10().floor());
    for m in NICE_FACTORS {
        if raw <= m * base {
            return m * base;
        }
    }
    10.0 * base
}

/// Multiples of `step` from `floor(lo/step)*step` up to (excluding) `hi + step`,
/// keeping only values strictly above `lo`. The last tick may overshoot `hi`
/// by less than one step.
///
/// At large magnitudes (microsecond epochs zoomed to sub-unit widths) nearby
/// multiples round to the same f64; those collapse to one tick, or none when
/// no representable value lies inside the range.
pub fn ticks(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    if !(step.is_finite() && step > 0.0 && lo.is_finite() && hi.is_finite()) {
        return Vec::new();
    }
    let start = (lo / step).floor();
    let end = hi + step;
    let count = ((end - start * step) / step).ceil();
    if !count.is_finite() || count < 1.0 {
        return Vec::new();
    }
    let mut out: Vec<f64> = Vec::new();
    // index-based so accumulated float error stays bounded
    for k in 1..=count as u64 {
        let v = (start + k as f64) * step;
        if v >= end {
            break;
        }
        if v <= lo || out.last().is_some_and(|&last| v <= last) {
            continue;
        }
        out.push(v);
    }
    out
}

/// Tick positions for both axes, in data units.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLines {
    pub x_step: f64,
    pub y_step: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Plan ticks independently for the horizontal and vertical range of `view`.
pub fn compute_grid_lines(view: &Viewport) -> GridLines {
    let x_step = nice_interval(view.width());
    let y_step = nice_interval(view.height());
    GridLines {
        x_step,
        y_step,
        x: ticks(view.left, view.right, x_step),
        y: ticks(view.bottom, view.top, y_step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn nice_interval_picks_first_fitting_factor() {
        assert_relative_eq!(nice_interval(0.7), 0.1, epsilon = 1e-12);
        assert_relative_eq!(nice_interval(3.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(nice_interval(7.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(nice_interval(15.0), 2.0, epsilon = 1e-12);
        assert_relative_eq!(nice_interval(30.0), 5.0, epsilon = 1e-12);
        assert_relative_eq!(nice_interval(70.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(nice_interval(100.0), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn nice_interval_guards_non_positive() {
        assert!(nice_interval(0.0) > 0.0);
        assert!(nice_interval(-5.0) > 0.0);
        assert!(nice_interval(f64::NAN) > 0.0);
    }

    #[test]
    fn ticks_drop_leading_and_overshoot_less_than_a_step() {
        assert_eq!(ticks(0.0, 10.0, 2.0), vec![2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(ticks(1.0, 9.0, 2.0), vec![2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(ticks(-3.0, 1.0, 1.0), vec![-2.0, -1.0, 0.0, 1.0]);
        assert!(ticks(0.0, 1.0, f64::NAN).is_empty());
    }

    #[test]
    fn grid_lines_for_both_axes() {
        let g = compute_grid_lines(&Viewport::new(0.0, 99.0, 0.0, 10.0));
        assert_relative_eq!(g.x_step, 10.0, epsilon = 1e-12);
        assert_relative_eq!(g.y_step, 1.0, epsilon = 1e-12);
        assert_eq!(g.x.first().copied(), Some(10.0));
        assert_eq!(g.y.len(), 10);
    }
}
