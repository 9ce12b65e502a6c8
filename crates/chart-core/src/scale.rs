// File: crates/chart-core/src/scale.rs
// Summary: Data-to-pixel transforms for linear and log10 axes.

use crate::axis::{Axis, ScaleKind};

/// Data-space value along an axis (city count, cost, milliseconds).
pub type Value = f64;

/// Maps an axis range onto a pixel interval.
///
/// `start_px` is where `vmin` lands and `end_px` where `vmax` lands, so a
/// vertical scale uses `start_px = bottom`, `end_px = top`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: Value,
    pub vmax: Value,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl ValueScale {
    pub fn new_linear(start_px: f32, end_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(start_px: f32, end_px: f32, mut vmin: Value, mut vmax: Value) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { start_px, end_px, vmin, vmax, log: true, log_min, log_max }
    }

    pub fn for_axis(axis: &Axis, start_px: f32, end_px: f32) -> Self {
        match axis.kind {
            ScaleKind::Linear => Self::new_linear(start_px, end_px, axis.min, axis.max),
            ScaleKind::Log10 => Self::new_log10(start_px, end_px, axis.min, axis.max),
        }
    }

    /// Fraction of the way from `vmin` to `vmax`, in the scale's own domain.
    #[inline]
    fn fraction(&self, v: Value) -> f64 {
        if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.log10() - self.log_min) / span
        } else {
            let span = (self.vmax - self.vmin).max(1e-12);
            (v - self.vmin) / span
        }
    }

    /// Pixel position of `v`, or `None` when `v` has no position on this scale
    /// (non-positive or non-finite on a log axis).
    #[inline]
    pub fn try_to_px(&self, v: Value) -> Option<f32> {
        if !v.is_finite() || (self.log && v <= 0.0) {
            return None;
        }
        Some(self.start_px + self.fraction(v) as f32 * (self.end_px - self.start_px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn px(s: &ValueScale, v: f64) -> f32 {
        s.try_to_px(v).expect("value has a position")
    }

    #[test]
    fn linear_maps_endpoints_and_midpoint() {
        let s = ValueScale::new_linear(100.0, 0.0, 0.0, 10.0);
        assert_eq!(px(&s, 0.0), 100.0);
        assert_eq!(px(&s, 10.0), 0.0);
        assert!((px(&s, 5.0) - 50.0).abs() < 1e-4);
    }

    #[test]
    fn log_decades_are_evenly_spaced() {
        let s = ValueScale::new_log10(300.0, 0.0, 1.0, 1000.0);
        assert!((px(&s, 1.0) - 300.0).abs() < 1e-3);
        assert!((px(&s, 10.0) - 200.0).abs() < 1e-3);
        assert!((px(&s, 100.0) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn log_rejects_non_positive() {
        let s = ValueScale::new_log10(300.0, 0.0, 1.0, 1000.0);
        assert_eq!(s.try_to_px(0.0), None);
        assert_eq!(s.try_to_px(-4.0), None);
        assert!(s.try_to_px(3.0).is_some());
        // linear accepts zero
        let l = ValueScale::new_linear(300.0, 0.0, -1.0, 1.0);
        assert_eq!(l.try_to_px(0.0), Some(150.0));
    }

    #[test]
    fn degenerate_ranges_are_widened() {
        let l = ValueScale::new_linear(0.0, 10.0, 2.0, 2.0);
        assert_eq!(l.vmax, 3.0);
        let g = ValueScale::new_log10(0.0, 10.0, 0.0, 0.0);
        assert!(g.vmin > 0.0 && g.vmax > g.vmin);
    }
}
