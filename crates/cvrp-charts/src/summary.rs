// File: crates/cvrp-charts/src/summary.rs
// Summary: Per-series result summary logged before the charts are shown.

use std::fmt;

use chart_core::BenchmarkData;

#[derive(Clone, Debug, PartialEq)]
pub struct SeriesSummary {
    pub name: String,
    pub best_cost: f64,
    pub slowest_ms: f64,
    pub total_ms: f64,
    /// Total time of the first (reference) series divided by this one's.
    pub speedup: Option<f64>,
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<32} best cost {:>8.0}  slowest {:>8.0} ms  total {:>8.0} ms",
            self.name, self.best_cost, self.slowest_ms, self.total_ms
        )?;
        match self.speedup {
            Some(s) => write!(f, "  speedup x{s:.2}"),
            None => Ok(()),
        }
    }
}

pub fn summarize(data: &BenchmarkData) -> Vec<SeriesSummary> {
    let reference = data.series.first().map(|s| s.times.iter().sum::<f64>());
    data.series
        .iter()
        .map(|s| {
            let total_ms: f64 = s.times.iter().sum();
            SeriesSummary {
                name: s.name.clone(),
                best_cost: s.costs.iter().copied().fold(f64::INFINITY, f64::min),
                slowest_ms: s.times.iter().copied().fold(0.0, f64::max),
                total_ms,
                speedup: reference.filter(|_| total_ms > 0.0).map(|r| r / total_ms),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chart_core::cvrp_results;

    #[test]
    fn summarizes_builtin_results() {
        let rows = summarize(&cvrp_results());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].name, "Global Search");
        assert_eq!(rows[0].best_cost, 261.0);
        assert_eq!(rows[0].slowest_ms, 37638.0);
        assert_eq!(rows[0].speedup, Some(1.0));
        // parallel global search roughly halves the total
        let s = rows[1].speedup.unwrap();
        assert!(s > 2.0 && s < 2.3, "{s}");
        assert!(rows[3].to_string().contains("Parallel Local Search"));
    }
}
