// File: crates/chart-core/tests/validation.rs
// Purpose: Validate-then-render: malformed data fails before the backend is touched.

use chart_core::{
    cvrp_results, BenchmarkData, BenchmarkSeries, ChartError, ChartRenderer, Field, Figure, FigureBackend,
    LogPolicy, RenderOptions,
};

#[derive(Default)]
struct CountingBackend {
    calls: usize,
}

impl FigureBackend for CountingBackend {
    fn draw(&mut self, _figure: &Figure) -> chart_core::error::Result<()> {
        self.calls += 1;
        Ok(())
    }
}

#[test]
fn short_costs_report_series_and_lengths() {
    let mut data = cvrp_results();
    data.series[2].costs.pop();

    let mut backend = CountingBackend::default();
    let err = ChartRenderer::default().render(&data, &mut backend).unwrap_err();
    match &err {
        ChartError::DataShape { series, field, expected, actual } => {
            assert_eq!(series, "Local Search");
            assert_eq!(*field, Field::Costs);
            assert_eq!((*expected, *actual), (7, 6));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let msg = err.to_string();
    assert!(msg.contains("Local Search") && msg.contains('6') && msg.contains('7'), "{msg}");
    assert_eq!(backend.calls, 0);
}

#[test]
fn long_times_are_rejected_not_truncated() {
    let mut data = cvrp_results();
    data.series[4].times.push(42.0);
    let err = ChartRenderer::default().build_figure(&data).unwrap_err();
    assert!(matches!(
        err,
        ChartError::DataShape { field: Field::Times, expected: 7, actual: 8, .. }
    ));
}

#[test]
fn empty_city_axis_fails_before_drawing() {
    let data = BenchmarkData::new(Vec::new(), vec![BenchmarkSeries::new("A", Vec::new(), Vec::new())]);
    let mut backend = CountingBackend::default();
    let err = ChartRenderer::default().render(&data, &mut backend).unwrap_err();
    assert!(matches!(err, ChartError::EmptyDataset));
    assert_eq!(backend.calls, 0);
}

#[test]
fn dataset_without_series_is_rejected() {
    let data = BenchmarkData::new(vec![4, 5], Vec::new());
    assert!(matches!(ChartRenderer::default().build_figure(&data), Err(ChartError::NoSeries)));
}

#[test]
fn unsorted_city_axis_is_rejected() {
    let mut data = cvrp_results();
    data.cities.swap(0, 1);
    assert!(matches!(
        ChartRenderer::default().build_figure(&data),
        Err(ChartError::InvalidCityAxis { index: 1, value: 4 })
    ));
}

#[test]
fn reject_policy_refuses_zero_times() {
    let opts = RenderOptions { log_policy: LogPolicy::Reject, ..RenderOptions::default() };
    let mut backend = CountingBackend::default();
    let err = ChartRenderer::new(opts).render(&cvrp_results(), &mut backend).unwrap_err();
    match err {
        ChartError::NonPositiveLogValue { series, city, value } => {
            assert_eq!(series, "Global Search");
            assert_eq!(city, 4);
            assert_eq!(value, 0.0);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(backend.calls, 0);
}

#[test]
fn reject_policy_accepts_positive_times() {
    let mut data = cvrp_results();
    data.series.remove(0);
    let opts = RenderOptions { log_policy: LogPolicy::Reject, ..RenderOptions::default() };
    let mut backend = CountingBackend::default();
    ChartRenderer::new(opts).render(&data, &mut backend).expect("all times positive");
    assert_eq!(backend.calls, 1);
}

#[test]
fn omit_policy_renders_zero_times() {
    let mut backend = CountingBackend::default();
    ChartRenderer::default().render(&cvrp_results(), &mut backend).expect("zeros are omitted");
    assert_eq!(backend.calls, 1);
}
