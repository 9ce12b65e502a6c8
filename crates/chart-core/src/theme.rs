// File: crates/chart-core/src/theme.rs
// Summary: Figure colours plus the declared per-series palette and markers.

use skia_safe as skia;

/// Point marker drawn at every data point of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
    Diamond,
    Cross,
}

pub const MARKERS: [Marker; 5] = [Marker::Circle, Marker::Square, Marker::Triangle, Marker::Diamond, Marker::Cross];

/// Visual identity of one series, identical across all panels of a figure.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub color: skia::Color,
    pub marker: Marker,
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub grid_minor: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub palette: [skia::Color; 10],
}

// Category10 palette
const CATEGORY10: [skia::Color; 10] = [
    skia::Color::new(0xff1f77b4),
    skia::Color::new(0xffff7f0e),
    skia::Color::new(0xff2ca02c),
    skia::Color::new(0xffd62728),
    skia::Color::new(0xff9467bd),
    skia::Color::new(0xff8c564b),
    skia::Color::new(0xffe377c2),
    skia::Color::new(0xff7f7f7f),
    skia::Color::new(0xffbcbd22),
    skia::Color::new(0xff17becf),
];

impl Theme {
    pub fn light() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 210, 210, 215),
            grid_minor: skia::Color::from_argb(255, 235, 235, 238),
            axis_line: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 60, 60, 70),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 200, 200, 205),
            palette: CATEGORY10,
        }
    }

    /// Style for the series declared at `index`; cycles past the palette length.
    pub fn series_style(&self, index: usize) -> SeriesStyle {
        SeriesStyle {
            color: self.palette[index % self.palette.len()],
            marker: MARKERS[index % MARKERS.len()],
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_follow_declaration_order() {
        let t = Theme::light();
        let a = t.series_style(0);
        let b = t.series_style(1);
        assert_ne!(a.color, b.color);
        assert_eq!(a.marker, Marker::Circle);
        assert_eq!(t.series_style(10).color, a.color);
        assert_eq!(t.series_style(5).marker, Marker::Circle);
    }
}
