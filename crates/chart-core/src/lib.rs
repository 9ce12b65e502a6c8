// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the benchmark data model, figure builder and Skia raster backend.

pub mod chart;
pub mod series;
pub mod dataset;
pub mod error;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod figure;
pub mod raster;
pub mod theme;
pub mod text;

pub use chart::{ChartRenderer, FigureBackend, LogPolicy, RenderOptions};
pub use series::{BenchmarkData, BenchmarkSeries};
pub use dataset::cvrp_results;
pub use error::{ChartError, Field};
pub use axis::{Axis, ScaleKind};
pub use figure::{Figure, GridMode, Line, Panel};
pub use raster::{RgbaFrame, SkiaRaster};
pub use theme::{Marker, SeriesStyle, Theme};
pub use text::TextShaper;
