// File: crates/tsview-core/src/resample.rs
// Summary: Per-pixel-column mean aggregation that reduces a visible window to at most one point per column.

use tracing::debug;

use crate::scale::{TimeScale, ValueScale};
use crate::table::TimeTable;
use crate::types::PixelPoint;
use crate::viewport::Viewport;

/// Mean value of every selected column for each occupied pixel column.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Aggregated {
    /// Occupied pixel columns, strictly ascending.
    pub columns_px: Vec<i32>,
    /// `means[k][b]` is the mean of selected column `k` in bucket `b`.
    pub means: Vec<Vec<f64>>,
    /// Rows that fell inside the closed time window.
    pub rows_in_window: usize,
}

impl Aggregated {
    pub fn len(&self) -> usize { self.columns_px.len() }
    pub fn is_empty(&self) -> bool { self.columns_px.is_empty() }
}

/// Screen-space polyline for one selected column.
#[derive(Clone, Debug, PartialEq)]
pub struct ReducedSeries {
    pub name: String,
    /// Position in the selection; drives palette color.
    pub slot: usize,
    pub points: Vec<PixelPoint>,
}

impl ReducedSeries {
    /// A line needs at least two points.
    pub fn is_drawable(&self) -> bool { self.points.len() >= 2 }
}

/// Range of row indices whose time lies in `[left, right]`; `time` must be ascending.
fn window_rows(time: &[i64], view: &Viewport) -> std::ops::Range<usize> {
    let start = time.partition_point(|&t| (t as f64) < view.left);
    let end = time.partition_point(|&t| (t as f64) <= view.right);
    start..end.max(start)
}

/// Filter rows to the viewport time window and average every selected column
/// per pixel column in one grouping pass. Pixel columns are clamped to `[0, width - 1]`
/// so there are never more than `width` buckets.
pub fn aggregate(table: &TimeTable, view: &Viewport, columns: &[usize], width: i32) -> Aggregated {
    let width = width.max(1);
    let ncols = columns.len();
    let rows = window_rows(table.time(), view);
    let rows_in_window = rows.len();
    if rows.is_empty() {
        return Aggregated { columns_px: Vec::new(), means: vec![Vec::new(); ncols], rows_in_window };
    }

    let xs = TimeScale::new(view, width);
    let w = width as usize;
    let mut counts = vec![0u32; w];
    // bucket-major so one row touches one contiguous slice
    let mut sums = vec![0.0f64; w * ncols];
    let data: Vec<&[f64]> = columns.iter().map(|&c| table.column_at(c)).collect();
    let time = table.time();
    for row in rows {
        let px = xs.to_column(time[row] as f64) as usize;
        counts[px] += 1;
        let slot = &mut sums[px * ncols..(px + 1) * ncols];
        for (acc, col) in slot.iter_mut().zip(&data) {
            *acc += col[row];
        }
    }

    let occupied = counts.iter().filter(|&&c| c > 0).count();
    let mut columns_px = Vec::with_capacity(occupied);
    let mut means = vec![Vec::with_capacity(occupied); ncols];
    for (px, &n) in counts.iter().enumerate().filter(|&(_, &n)| n > 0) {
        columns_px.push(px as i32);
        let slot = &sums[px * ncols..(px + 1) * ncols];
        for (out, &s) in means.iter_mut().zip(slot) {
            out.push(s / n as f64);
        }
    }
    Aggregated { columns_px, means, rows_in_window }
}

/// Reduce the visible window of `columns` to `(pixel_x, pixel_y)` polylines for a
/// `width` x `height` drawing surface.
pub fn resample(
    table: &TimeTable,
    view: &Viewport,
    columns: &[usize],
    width: i32,
    height: i32,
) -> Vec<ReducedSeries> {
    let agg = aggregate(table, view, columns, width);
    let ys = ValueScale::new(view, height);
    debug!(rows = agg.rows_in_window, buckets = agg.len(), series = columns.len(), "resampled window");
    columns
        .iter()
        .zip(&agg.means)
        .enumerate()
        .map(|(slot, (&c, means))| ReducedSeries {
            name: table.names()[c].clone(),
            slot,
            points: agg.columns_px.iter().zip(means).map(|(&x, &v)| (x, ys.to_px(v))).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: i64) -> TimeTable {
        let time: Vec<i64> = (0..n).collect();
        let up: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let flat = vec![5.0; n as usize];
        TimeTable::new(time, vec![("up".into(), up), ("flat".into(), flat)]).unwrap()
    }

    #[test]
    fn constant_column_collapses_to_flat_buckets() {
        let t = ramp(100);
        let view = Viewport::new(0.0, 99.0, 0.0, 10.0);
        let agg = aggregate(&t, &view, &[1], 10);
        assert_eq!(agg.len(), 10);
        assert!(agg.means[0].iter().all(|&m| m == 5.0));

        let out = resample(&t, &view, &[1], 10, 100);
        assert_eq!(out[0].points.len(), 10);
        assert!(out[0].points.iter().all(|&(_, y)| y == 50));
    }

    #[test]
    fn window_is_closed_on_both_ends() {
        let t = ramp(10);
        let view = Viewport::new(2.0, 5.0, 0.0, 10.0);
        let agg = aggregate(&t, &view, &[0], 1000);
        assert_eq!(agg.rows_in_window, 4);
    }

    #[test]
    fn all_columns_share_buckets() {
        let t = ramp(50);
        let view = Viewport::new(0.0, 49.0, 0.0, 49.0);
        let out = resample(&t, &view, &[0, 1], 7, 49);
        assert_eq!(out.len(), 2);
        let xs0: Vec<i32> = out[0].points.iter().map(|p| p.0).collect();
        let xs1: Vec<i32> = out[1].points.iter().map(|p| p.0).collect();
        assert_eq!(xs0, xs1);
        assert_eq!(out[1].slot, 1);
        assert_eq!(out[1].name, "flat");
    }

    #[test]
    fn empty_window_yields_no_points() {
        let t = ramp(10);
        let view = Viewport::new(1000.0, 2000.0, 0.0, 1.0);
        let out = resample(&t, &view, &[0, 1], 100, 100);
        assert!(out.iter().all(|s| s.points.is_empty() && !s.is_drawable()));
    }

    #[test]
    fn bucket_mean_is_arithmetic_mean() {
        let t = TimeTable::new(vec![0, 1, 10, 11], vec![("v".into(), vec![1.0, 3.0, 10.0, 20.0])]).unwrap();
        // two pixel columns: t in {0,1} -> 0, t in {10,11} -> 1
        let agg = aggregate(&t, &Viewport::new(0.0, 20.0, 0.0, 20.0), &[0], 2);
        assert_eq!(agg.columns_px, vec![0, 1]);
        assert_eq!(agg.means[0], vec![2.0, 15.0]);
    }
}
