// File: crates/tsview-core/src/axis.rs
// Summary: Axis kinds and tick label formatting.

use chrono::{DateTime, Utc};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    /// Microsecond epoch timestamps.
    Time,
    /// Plain numeric values.
    Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Axis {
    pub kind: AxisKind,
}

impl Axis {
    pub const fn time() -> Self { Self { kind: AxisKind::Time } }
    pub const fn value() -> Self { Self { kind: AxisKind::Value } }

    /// Label for a tick at `v` on an axis whose ticks are `step` apart.
    pub fn format_tick(&self, v: f64, step: f64) -> String {
        match self.kind {
            AxisKind::Time => format_time_micros(v),
            AxisKind::Value => format_value(v, step),
        }
    }
}

/// `%Y-%m-%d %H:%M:%S` (UTC) for a microsecond timestamp; raw number when out of range.
pub fn format_time_micros(us: f64) -> String {
    if us.is_finite() && us.abs() < i64::MAX as f64 {
        if let Some(dt) = DateTime::<Utc>::from_timestamp_micros(us.round() as i64) {
            return dt.format("%Y-%m-%d %H:%M:%S").to_string();
        }
    }
    format!("{us}")
}

/// Enough decimals to tell neighbouring ticks apart.
pub fn format_value(v: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 {
        (-step.log10().floor()).clamp(0.0, 12.0) as usize
    } else {
        2
    };
    // avoid "-0.00"
    let v = if v.abs() < step.abs() * 1e-9 { 0.0 } else { v };
    format!("{v:.decimals$}")
}
