// File: crates/chart-core/src/grid.rs
// Summary: Tick placement for linear and log axes, plus tick label formatting.

use crate::axis::{Axis, ScaleKind};

/// Ticks for one axis: labeled majors and unlabeled minors.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ticks {
    pub major: Vec<f64>,
    pub minor: Vec<f64>,
}

impl Ticks {
    pub fn for_axis(axis: &Axis, target: usize) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self { major: linear_ticks(axis.min, axis.max, target), minor: Vec::new() },
            ScaleKind::Log10 => log_ticks(axis.min, axis.max),
        }
    }
}

/// Smallest step from {1, 2, 2.5, 5} x 10^k giving at most `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let target = target.max(1) as f64;
    let raw = (span.abs() / target).max(1e-12);
    let mag = 10f64.powi(raw.log10().floor() as i32);
    for m in [1.0, 2.0, 2.5, 5.0, 10.0] {
        if m * mag >= raw - 1e-12 {
            return m * mag;
        }
    }
    10.0 * mag
}

/// Multiples of a nice step lying inside `[min, max]`.
pub fn linear_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min {
        return Vec::new();
    }
    let step = nice_step(max - min, target);
    let first = (min / step - 1e-9).ceil() as i64;
    let last = (max / step + 1e-9).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Decade majors and 2..9 x decade minors inside `[min, max]` (min > 0).
pub fn log_ticks(min: f64, max: f64) -> Ticks {
    let mut ticks = Ticks::default();
    if !(min > 0.0 && max > min) {
        return ticks;
    }
    let tol = 1e-9;
    let lo = min.log10().floor() as i32;
    let hi = max.log10().ceil() as i32;
    for e in lo..=hi {
        let decade = 10f64.powi(e);
        if decade >= min * (1.0 - tol) && decade <= max * (1.0 + tol) {
            ticks.major.push(decade);
        }
        for m in 2..=9 {
            let v = decade * m as f64;
            if v > min * (1.0 + tol) && v < max * (1.0 - tol) {
                ticks.minor.push(v);
            }
        }
    }
    ticks
}

/// Compact label: integers without decimals, others trimmed to 3 places.
pub fn format_tick(v: f64) -> String {
    if v.abs() < 1e-9 {
        return "0".to_string();
    }
    if (v - v.round()).abs() < 1e-9 * v.abs().max(1.0) {
        return format!("{}", v.round() as i64);
    }
    let s = format!("{v:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_axis_ticks_every_city() {
        assert_eq!(linear_ticks(3.88, 10.12, 8), vec![4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
    }

    #[test]
    fn cost_axis_ticks_are_round() {
        let t = linear_ticks(254.74, 580.26, 8);
        assert_eq!(t, vec![300.0, 350.0, 400.0, 450.0, 500.0, 550.0]);
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(10.0, 10), 1.0);
        assert_eq!(nice_step(38000.0, 8), 5000.0);
        assert_eq!(nice_step(9.0, 4), 2.5);
    }

    #[test]
    fn log_ticks_majors_and_minors() {
        let t = log_ticks(1.0, 1000.0);
        assert_eq!(t.major, vec![1.0, 10.0, 100.0, 1000.0]);
        assert_eq!(t.minor.len(), 8 * 3);
        assert_eq!(t.minor[0], 2.0);
        assert_eq!(*t.minor.last().unwrap(), 900.0);
    }

    #[test]
    fn tick_labels() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(10000.0), "10000");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(-0.125), "-0.125");
    }
}
