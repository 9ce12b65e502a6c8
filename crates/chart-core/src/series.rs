// File: crates/chart-core/src/series.rs
// Summary: Benchmark data model (city axis + named cost/time series) and its validation.
// Notes:
// - Data is immutable once validated; the renderer borrows it for a single pass.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Field, Result};

/// One solver variant's results: a cost and a time per benchmark instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkSeries {
    pub name: String,
    pub costs: Vec<f64>,
    /// Wall-clock time in milliseconds.
    pub times: Vec<f64>,
}

impl BenchmarkSeries {
    pub fn new(name: impl Into<String>, costs: Vec<f64>, times: Vec<f64>) -> Self {
        Self { name: name.into(), costs, times }
    }

    /// Build from integer literals, the form results are usually recorded in.
    pub fn from_ints(name: impl Into<String>, costs: &[i64], times: &[i64]) -> Self {
        Self::new(
            name,
            costs.iter().map(|&c| c as f64).collect(),
            times.iter().map(|&t| t as f64).collect(),
        )
    }

    /// `(city, cost)` pairs aligned to `cities`.
    pub fn cost_points(&self, cities: &[u32]) -> Vec<(f64, f64)> {
        zip_points(cities, &self.costs)
    }

    /// `(city, time)` pairs aligned to `cities`.
    pub fn time_points(&self, cities: &[u32]) -> Vec<(f64, f64)> {
        zip_points(cities, &self.times)
    }
}

fn zip_points(cities: &[u32], values: &[f64]) -> Vec<(f64, f64)> {
    cities.iter().zip(values).map(|(&c, &v)| (c as f64, v)).collect()
}

/// The shared city axis plus every series plotted against it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkData {
    pub cities: Vec<u32>,
    pub series: Vec<BenchmarkSeries>,
}

impl BenchmarkData {
    pub fn new(cities: Vec<u32>, series: Vec<BenchmarkSeries>) -> Self {
        Self { cities, series }
    }

    /// Check every structural invariant. Nothing is drawn from data that fails here.
    ///
    /// Order of checks: empty axis, missing series, axis ordering, then per
    /// series (declaration order) the lengths of `costs` and `times` followed
    /// by finiteness.
    pub fn validate(&self) -> Result<()> {
        if self.cities.is_empty() {
            return Err(ChartError::EmptyDataset);
        }
        if self.series.is_empty() {
            return Err(ChartError::NoSeries);
        }

        let mut prev = 0u32;
        for (index, &value) in self.cities.iter().enumerate() {
            if value == 0 || (index > 0 && value <= prev) {
                return Err(ChartError::InvalidCityAxis { index, value });
            }
            prev = value;
        }

        let expected = self.cities.len();
        for s in &self.series {
            for (field, values) in [(Field::Costs, &s.costs), (Field::Times, &s.times)] {
                if values.len() != expected {
                    return Err(ChartError::DataShape {
                        series: s.name.clone(),
                        field,
                        expected,
                        actual: values.len(),
                    });
                }
                if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                    return Err(ChartError::NonFiniteValue { series: s.name.clone(), field, index });
                }
            }
        }
        Ok(())
    }

    /// First time value that cannot be placed on a log axis, if any.
    pub fn first_non_positive_time(&self) -> Option<(&BenchmarkSeries, u32, f64)> {
        self.series.iter().find_map(|s| {
            self.cities
                .iter()
                .zip(&s.times)
                .find(|(_, &t)| t <= 0.0)
                .map(|(&city, &t)| (s, city, t))
        })
    }

    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> BenchmarkData {
        BenchmarkData::new(
            vec![2, 3],
            vec![BenchmarkSeries::from_ints("A", &[1, 2], &[3, 4])],
        )
    }

    #[test]
    fn valid_data_passes() {
        assert!(tiny().validate().is_ok());
    }

    #[test]
    fn times_length_mismatch_is_reported_after_costs() {
        let mut d = tiny();
        d.series[0].times.pop();
        match d.validate() {
            Err(ChartError::DataShape { field, expected, actual, .. }) => {
                assert_eq!(field, Field::Times);
                assert_eq!((expected, actual), (2, 1));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn non_increasing_cities_rejected() {
        let mut d = tiny();
        d.cities = vec![3, 3];
        assert!(matches!(d.validate(), Err(ChartError::InvalidCityAxis { index: 1, value: 3 })));
        d.cities = vec![0, 3];
        assert!(matches!(d.validate(), Err(ChartError::InvalidCityAxis { index: 0, .. })));
    }

    #[test]
    fn nan_rejected() {
        let mut d = tiny();
        d.series[0].costs[1] = f64::NAN;
        assert!(matches!(
            d.validate(),
            Err(ChartError::NonFiniteValue { field: Field::Costs, index: 1, .. })
        ));
    }

    #[test]
    fn first_non_positive_time_scans_in_declaration_order() {
        let mut d = tiny();
        assert!(d.first_non_positive_time().is_none());
        d.series[0].times[1] = 0.0;
        let (s, city, t) = d.first_non_positive_time().unwrap();
        assert_eq!((s.name.as_str(), city, t), ("A", 3, 0.0));
    }
}
