// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges and data-driven autoscaling.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Log10 }
    }

    /// Linear axis covering `values` with a `margin` fraction of the span on each side.
    pub fn fit_linear(label: impl Into<String>, values: impl IntoIterator<Item = f64>, margin: f64) -> Self {
        let (mut lo, mut hi) = min_max(values).unwrap_or((0.0, 1.0));
        if (hi - lo).abs() < 1e-9 {
            lo -= 0.5;
            hi += 0.5;
        }
        let m = (hi - lo) * margin;
        Self::new(label, lo - m, hi + m)
    }

    /// Log axis spanning whole decades around the positive `values`.
    /// Non-positive values are ignored; with none left the axis spans 1..10.
    pub fn fit_log10(label: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        let (lo, hi) = min_max(values.into_iter().filter(|v| *v > 0.0)).unwrap_or((1.0, 10.0));
        let lo = 10f64.powi(lo.log10().floor() as i32);
        let mut hi = 10f64.powi(hi.log10().ceil() as i32);
        if hi <= lo {
            hi = lo * 10.0;
        }
        Self::log10(label, lo, hi)
    }
}

fn min_max(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_fit_adds_margin() {
        let a = Axis::fit_linear("x", [4.0, 10.0], 0.02);
        assert!((a.min - 3.88).abs() < 1e-9);
        assert!((a.max - 10.12).abs() < 1e-9);
        assert_eq!(a.kind, ScaleKind::Linear);
    }

    #[test]
    fn linear_fit_single_value_gets_unit_span() {
        let a = Axis::fit_linear("x", [5.0], 0.0);
        assert_eq!((a.min, a.max), (4.5, 5.5));
    }

    #[test]
    fn log_fit_snaps_to_decades_and_skips_zero() {
        let a = Axis::fit_log10("t", [0.0, 2.0, 37638.0]);
        assert_eq!(a.kind, ScaleKind::Log10);
        assert_eq!(a.min, 1.0);
        assert_eq!(a.max, 100_000.0);
    }

    #[test]
    fn log_fit_exact_decade_still_spans_one() {
        let a = Axis::fit_log10("t", [100.0]);
        assert_eq!((a.min, a.max), (100.0, 1000.0));
        let b = Axis::fit_log10("t", [-3.0]);
        assert_eq!((b.min, b.max), (1.0, 10.0));
    }
}
