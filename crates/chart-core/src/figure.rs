// File: crates/chart-core/src/figure.rs
// Summary: Backend-independent figure model: three panels of labeled, styled lines.

use crate::axis::Axis;
use crate::grid::Ticks;
use crate::scale::ValueScale;
use crate::series::{BenchmarkData, BenchmarkSeries};
use crate::theme::{SeriesStyle, Theme};

pub const X_LABEL: &str = "Number of Cities";
pub const COST_LABEL: &str = "Best Route Cost";
pub const TIME_LABEL: &str = "Time Taken (ms)";
pub const TIME_LOG_LABEL: &str = "Time Taken (ms) (log scale)";

pub const COST_TITLE: &str = "CVRP Algorithm Best Route Costs";
pub const TIME_TITLE: &str = "CVRP Algorithm Times";
pub const TIME_LOG_TITLE: &str = "CVRP Algorithm Times (Log Scale)";

/// Fraction of the data span added above and below linear axes.
pub const AXIS_MARGIN: f64 = 0.02;

const X_TICK_TARGET: usize = 8;
const Y_TICK_TARGET: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridMode {
    Off,
    Major,
    /// Major and minor gridlines, dashed.
    MajorMinor,
}

/// One series drawn in a panel. Points are in data space, one per city.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    pub label: String,
    pub style: SeriesStyle,
    pub points: Vec<(f64, f64)>,
}

impl Line {
    /// Pixel positions under the given scales. A point with no position on
    /// the scale (zero time on a log axis) yields `None` and breaks the line.
    pub fn project(&self, x: &ValueScale, y: &ValueScale) -> Vec<Option<(f32, f32)>> {
        self.points
            .iter()
            .map(|&(px, py)| Some((x.try_to_px(px)?, y.try_to_px(py)?)))
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub lines: Vec<Line>,
    pub grid: GridMode,
}

impl Panel {
    /// Legend entries, in series declaration order.
    pub fn legend(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.label.as_str()).collect()
    }

    pub fn x_ticks(&self) -> Ticks {
        Ticks::for_axis(&self.x_axis, X_TICK_TARGET)
    }

    pub fn y_ticks(&self) -> Ticks {
        Ticks::for_axis(&self.y_axis, Y_TICK_TARGET)
    }

    /// Horizontal scale for a plot area spanning `left..right` pixels.
    pub fn x_scale(&self, left: f32, right: f32) -> ValueScale {
        ValueScale::for_axis(&self.x_axis, left, right)
    }

    /// Vertical scale for a plot area spanning `top..bottom` pixels.
    pub fn y_scale(&self, top: f32, bottom: f32) -> ValueScale {
        ValueScale::for_axis(&self.y_axis, bottom, top)
    }

    /// Look up the y value of the line labeled `label` at data x `x`.
    pub fn value_at(&self, label: &str, x: f64) -> Option<f64> {
        self.lines
            .iter()
            .find(|l| l.label == label)?
            .points
            .iter()
            .find(|(px, _)| (*px - x).abs() < 1e-9)
            .map(|&(_, y)| y)
    }
}

/// A composite of side-by-side panels, sized in pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub width: i32,
    pub height: i32,
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Cost, linear time and log time panels for already validated `data`.
    pub(crate) fn benchmark(data: &BenchmarkData, theme: &Theme, width: i32, height: i32) -> Self {
        let cities = &data.cities;
        let x_values = || cities.iter().map(|&c| c as f64);

        let lines = |points: fn(&BenchmarkSeries, &[u32]) -> Vec<(f64, f64)>| -> Vec<Line> {
            data.series
                .iter()
                .enumerate()
                .map(|(i, s)| Line { label: s.name.clone(), style: theme.series_style(i), points: points(s, cities) })
                .collect()
        };
        let cost_lines = lines(BenchmarkSeries::cost_points);
        let time_lines = lines(BenchmarkSeries::time_points);

        let all_costs = || data.series.iter().flat_map(|s| s.costs.iter().copied());
        let all_times = || data.series.iter().flat_map(|s| s.times.iter().copied());

        let x_axis = Axis::fit_linear(X_LABEL, x_values(), AXIS_MARGIN);

        let cost = Panel {
            title: COST_TITLE.to_string(),
            x_axis: x_axis.clone(),
            y_axis: Axis::fit_linear(COST_LABEL, all_costs(), AXIS_MARGIN),
            lines: cost_lines,
            grid: GridMode::Major,
        };
        let time = Panel {
            title: TIME_TITLE.to_string(),
            x_axis: x_axis.clone(),
            y_axis: Axis::fit_linear(TIME_LABEL, all_times(), AXIS_MARGIN),
            lines: time_lines.clone(),
            grid: GridMode::Major,
        };
        let time_log = Panel {
            title: TIME_LOG_TITLE.to_string(),
            x_axis,
            y_axis: Axis::fit_log10(TIME_LOG_LABEL, all_times()),
            lines: time_lines,
            grid: GridMode::MajorMinor,
        };

        Self { width, height, panels: vec![cost, time, time_log] }
    }

    pub fn panel_by_title(&self, title: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.title == title)
    }
}
