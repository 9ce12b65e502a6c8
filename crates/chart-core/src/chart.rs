// File: crates/chart-core/src/chart.rs
// Summary: ChartRenderer: validate benchmark data, build the three-panel figure, hand it to a backend.

use log::{debug, warn};

use crate::error::{ChartError, Result};
use crate::figure::Figure;
use crate::series::BenchmarkData;
use crate::theme::Theme;
use crate::types::{TextMetrics, HEIGHT, WIDTH};

/// What to do with time values that have no position on a log axis (<= 0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogPolicy {
    /// Keep the value in the figure; the log panel leaves a gap at that point.
    #[default]
    Omit,
    /// Fail validation with [`ChartError::NonPositiveLogValue`].
    Reject,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub theme: Theme,
    pub text: TextMetrics,
    pub log_policy: LogPolicy,
    /// Draw titles, axis labels, tick labels and legend text.
    pub draw_labels: bool,
    /// Horizontal gap between panels, in pixels.
    pub panel_gap: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            theme: Theme::default(),
            text: TextMetrics::default(),
            log_policy: LogPolicy::default(),
            draw_labels: true,
            panel_gap: 0,
        }
    }
}

/// Something that can show a finished figure: a raster surface, a window.
pub trait FigureBackend {
    fn draw(&mut self, figure: &Figure) -> Result<()>;
}

pub struct ChartRenderer {
    opts: RenderOptions,
}

impl ChartRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Validate `data` and lay it out as cost, time and log-time panels.
    /// No figure is produced from data that fails validation.
    pub fn build_figure(&self, data: &BenchmarkData) -> Result<Figure> {
        data.validate()?;

        if let Some((series, city, value)) = data.first_non_positive_time() {
            match self.opts.log_policy {
                LogPolicy::Reject => {
                    return Err(ChartError::NonPositiveLogValue { series: series.name.clone(), city, value });
                }
                LogPolicy::Omit => {
                    warn!("'{}' has time {value} at {city} cities; omitted from the log panel", series.name);
                }
            }
        }

        let figure = Figure::benchmark(data, &self.opts.theme, self.opts.width, self.opts.height);
        debug!(
            "figure {}x{}: {} panels, {} series, {} cities",
            figure.width,
            figure.height,
            figure.panels.len(),
            data.series.len(),
            data.cities.len()
        );
        Ok(figure)
    }

    /// Build the figure and draw it on `backend`. The backend is only called
    /// once the whole figure has been built.
    pub fn render<B: FigureBackend + ?Sized>(&self, data: &BenchmarkData, backend: &mut B) -> Result<Figure> {
        let figure = self.build_figure(data)?;
        backend.draw(&figure)?;
        Ok(figure)
    }
}

impl Default for ChartRenderer {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}
