// File: crates/chart-core/src/dataset.rs
// Summary: Built-in CVRP results and loaders for JSON/CSV dataset files.

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};
use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::series::{BenchmarkData, BenchmarkSeries};

pub const GLOBAL_SEARCH: &str = "Global Search";
pub const PARALLEL_GLOBAL_SEARCH: &str = "Parallel Global Search";
pub const LOCAL_SEARCH: &str = "Local Search";
pub const PARALLEL_LOCAL_SEARCH: &str = "Parallel Local Search";
pub const PARALLEL_LOCAL_SEARCH_MPI: &str = "Parallel Local Search with MPI";

/// Recorded results for the five solver variants on instances of 4..=10 cities.
pub fn cvrp_results() -> BenchmarkData {
    BenchmarkData::new(
        vec![4, 5, 6, 7, 8, 9, 10],
        vec![
            BenchmarkSeries::from_ints(
                GLOBAL_SEARCH,
                &[302, 261, 319, 365, 454, 553, 422],
                &[0, 0, 3, 20, 348, 3960, 37638],
            ),
            BenchmarkSeries::from_ints(
                PARALLEL_GLOBAL_SEARCH,
                &[302, 261, 319, 365, 454, 553, 422],
                &[16, 8, 2, 11, 151, 1546, 18103],
            ),
            BenchmarkSeries::from_ints(
                LOCAL_SEARCH,
                &[326, 281, 369, 430, 540, 571, 526],
                &[444, 525, 644, 741, 899, 1033, 1288],
            ),
            BenchmarkSeries::from_ints(
                PARALLEL_LOCAL_SEARCH,
                &[326, 281, 369, 430, 574, 571, 526],
                &[56, 40, 49, 60, 68, 77, 100],
            ),
            BenchmarkSeries::from_ints(
                PARALLEL_LOCAL_SEARCH_MPI,
                &[326, 281, 369, 430, 556, 571, 526],
                &[580, 160, 149, 156, 216, 156, 90],
            ),
        ],
    )
}

/// Load a dataset file, picking the parser from the extension (`.json` or `.csv`).
/// The result is validated before it is returned.
pub fn load(path: impl AsRef<Path>) -> Result<BenchmarkData> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let data = match ext.as_str() {
        "json" => from_json_str(&std::fs::read_to_string(path)?)?,
        "csv" => from_csv_reader(std::fs::File::open(path)?)?,
        other => {
            return Err(ChartError::Format(format!(
                "unsupported extension '{other}' for {} (expected .json or .csv)",
                path.display()
            )))
        }
    };
    data.validate()?;
    info!(
        "loaded {} series over {} city counts from {}",
        data.series.len(),
        data.cities.len(),
        path.display()
    );
    Ok(data)
}

/// Parse `{ "cities": [..], "series": [{ "name", "costs", "times" }] }`.
pub fn from_json_str(text: &str) -> Result<BenchmarkData> {
    Ok(serde_json::from_str(text)?)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    series: String,
    cities: u32,
    cost: f64,
    time_ms: f64,
}

/// Parse long-format rows `series,cities,cost,time_ms`.
///
/// Series keep the order of their first row. The city axis comes from the
/// series with the most rows (the earliest on a tie); every series of that
/// length must list exactly the same cities in the same order, and shorter
/// ones are left for `validate` to report by name.
pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<BenchmarkData> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let mut order: Vec<String> = Vec::new();
    let mut rows: HashMap<String, Vec<CsvRow>> = HashMap::new();
    for rec in rdr.deserialize::<CsvRow>() {
        let row = rec?;
        if !rows.contains_key(&row.series) {
            order.push(row.series.clone());
        }
        rows.entry(row.series.clone()).or_default().push(row);
    }
    debug!("csv dataset: {} series", order.len());

    // max_by_key keeps the last maximum, so scan in reverse for the earliest
    let Some(axis) = order.iter().rev().max_by_key(|name| rows[*name].len()) else {
        return Ok(BenchmarkData::new(Vec::new(), Vec::new()));
    };
    let cities: Vec<u32> = rows[axis].iter().map(|r| r.cities).collect();

    let mut series = Vec::with_capacity(order.len());
    for name in &order {
        let group = &rows[name];
        let row_cities: Vec<u32> = group.iter().map(|r| r.cities).collect();
        if group.len() == cities.len() && row_cities != cities {
            return Err(ChartError::Format(format!(
                "series '{name}' lists cities {row_cities:?}, expected {cities:?}"
            )));
        }
        series.push(BenchmarkSeries::new(
            name.clone(),
            group.iter().map(|r| r.cost).collect(),
            group.iter().map(|r| r.time_ms).collect(),
        ));
    }
    Ok(BenchmarkData::new(cities, series))
}
