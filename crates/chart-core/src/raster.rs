// File: crates/chart-core/src/raster.rs
// Summary: Skia CPU raster backend: draws a Figure (grid, axes, ticks, lines, markers, legend) to RGBA8.

use log::trace;
use skia_safe as skia;

use crate::chart::{FigureBackend, RenderOptions};
use crate::error::{ChartError, Result};
use crate::figure::{Figure, GridMode, Line, Panel};
use crate::geometry::{split_columns, tight_insets, RectI32};
use crate::grid::format_tick;
use crate::scale::ValueScale;
use crate::text::TextShaper;
use crate::theme::{Marker, Theme};
use crate::types::Insets;

const LINE_WIDTH: f32 = 2.0;
const MARKER_RADIUS: f32 = 4.0;
const LEGEND_SWATCH: f32 = 24.0;
// legend box width when labels are not drawn
const LEGEND_UNLABELED_WIDTH: f32 = 48.0;

/// Tightly packed RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

impl RgbaFrame {
    /// RGBA of the pixel at (`x`, `y`), or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride + x as usize * 4;
        let px = self.pixels.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Rasterizes figures on a CPU surface. As a [`FigureBackend`] it keeps the
/// most recent frame.
pub struct SkiaRaster {
    opts: RenderOptions,
    shaper: Option<TextShaper>,
    last: Option<RgbaFrame>,
}

impl SkiaRaster {
    pub fn new(opts: &RenderOptions) -> Self {
        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
        Self { opts: opts.clone(), shaper, last: None }
    }

    pub fn last_frame(&self) -> Option<&RgbaFrame> {
        self.last.as_ref()
    }

    pub fn into_last_frame(self) -> Option<RgbaFrame> {
        self.last
    }

    /// Rasterize at the figure's own size.
    pub fn rasterize(&self, figure: &Figure) -> Result<RgbaFrame> {
        self.rasterize_sized(figure, figure.width, figure.height)
    }

    /// Rasterize laid out for a `width` x `height` surface (e.g. a resized window).
    pub fn rasterize_sized(&self, figure: &Figure, width: i32, height: i32) -> Result<RgbaFrame> {
        let (width, height) = (width.max(1), height.max(1));
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| ChartError::Backend(format!("failed to create {width}x{height} raster surface")))?;

        {
            let canvas = surface.canvas();
            canvas.clear(self.opts.theme.background);
            let columns = split_columns(width, height, figure.panels.len(), self.opts.panel_gap);
            for (panel, column) in figure.panels.iter().zip(columns) {
                self.draw_panel(canvas, panel, column);
            }
        }

        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        let info = skia::ImageInfo::new((width, height), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Backend("pixel readback failed".into()));
        }
        trace!("rasterized {} panels at {width}x{height}", figure.panels.len());
        Ok(RgbaFrame { pixels, width: width as u32, height: height as u32, stride })
    }

    fn insets_for(&self, panel: &Panel) -> Insets {
        match &self.shaper {
            Some(shaper) => tight_insets(panel, &self.opts.text, &|t, s, mono| shaper.measure_width(t, s, mono)),
            None => Insets::default(),
        }
    }

    fn draw_panel(&self, canvas: &skia::Canvas, panel: &Panel, column: RectI32) {
        let theme = &self.opts.theme;
        let plot = column.inset(&self.insets_for(panel));
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
        let xs = panel.x_scale(l, r);
        let ys = panel.y_scale(t, b);

        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(plot.to_skia(), &bg);

        draw_grid(canvas, panel, plot, &xs, &ys, theme);
        self.draw_axes(canvas, panel, plot, &xs, &ys);

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for line in &panel.lines {
            draw_line(canvas, line, &xs, &ys);
        }
        canvas.restore();

        self.draw_legend(canvas, panel, plot, &xs, &ys);
    }

    fn draw_axes(&self, canvas: &skia::Canvas, panel: &Panel, plot: RectI32, xs: &ValueScale, ys: &ValueScale) {
        let theme = &self.opts.theme;
        let m = &self.opts.text;
        let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

        let mut frame = skia::Paint::default();
        frame.set_color(theme.axis_line);
        frame.set_anti_alias(true);
        frame.set_style(skia::paint::Style::Stroke);
        frame.set_stroke_width(1.0);
        canvas.draw_rect(plot.to_skia(), &frame);

        let x_ticks: Vec<(f64, f32)> =
            panel.x_ticks().major.into_iter().filter_map(|v| Some((v, xs.try_to_px(v)?))).collect();
        let y_ticks: Vec<(f64, f32)> =
            panel.y_ticks().major.into_iter().filter_map(|v| Some((v, ys.try_to_px(v)?))).collect();

        for &(_, x) in &x_ticks {
            canvas.draw_line((x, b), (x, b + m.tick_len), &frame);
        }
        for &(_, y) in &y_ticks {
            canvas.draw_line((l - m.tick_len, y), (l, y), &frame);
        }

        let Some(shaper) = &self.shaper else { return };
        let line = |size: f32| size * 1.25;

        let mut widest = 0.0f32;
        for &(v, x) in &x_ticks {
            shaper.draw_centered(canvas, &format_tick(v), x, b + m.tick_len + m.pad + m.tick, m.tick, theme.tick, true);
        }
        for &(v, y) in &y_ticks {
            let text = format_tick(v);
            widest = widest.max(shaper.measure_width(&text, m.tick, true));
            shaper.draw_right(canvas, &text, l - m.tick_len - m.pad, y + m.tick * 0.35, m.tick, theme.tick, true);
        }

        let cx = (l + r) * 0.5;
        let x_label_y = b + m.tick_len + m.pad + line(m.tick) + m.pad + m.label;
        shaper.draw_centered(canvas, &panel.x_axis.label, cx, x_label_y, m.label, theme.axis_label, false);

        let y_label_x = l - m.tick_len - m.pad - widest - m.pad - line(m.label) * 0.5;
        shaper.draw_vertical(canvas, &panel.y_axis.label, y_label_x, (t + b) * 0.5, m.label, theme.axis_label);

        shaper.draw_centered(canvas, &panel.title, cx, t - m.pad - m.title * 0.25, m.title, theme.axis_label, false);
    }

    fn draw_legend(&self, canvas: &skia::Canvas, panel: &Panel, plot: RectI32, xs: &ValueScale, ys: &ValueScale) {
        if panel.lines.is_empty() {
            return;
        }
        let theme = &self.opts.theme;
        let size = self.opts.text.legend;
        let pad = self.opts.text.pad;
        let row = size * 1.5;

        let text_w = match &self.shaper {
            Some(shaper) => panel
                .lines
                .iter()
                .map(|l| shaper.measure_width(&l.label, size, false))
                .fold(0.0f32, f32::max),
            None => LEGEND_UNLABELED_WIDTH,
        };
        let w = pad + LEGEND_SWATCH + pad + text_w + pad;
        let h = pad + row * panel.lines.len() as f32 + pad;

        let points: Vec<(f32, f32)> = panel
            .lines
            .iter()
            .flat_map(|line| line.project(xs, ys))
            .flatten()
            .collect();
        let (x0, y0) = legend_origin(plot, w, h, pad, &points);

        let rect = skia::Rect::from_xywh(x0, y0, w, h);
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(theme.legend_background);
        canvas.draw_round_rect(rect, 3.0, 3.0, &fill);
        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_color(theme.legend_border);
        canvas.draw_round_rect(rect, 3.0, 3.0, &border);

        for (i, line) in panel.lines.iter().enumerate() {
            let cy = y0 + pad + row * (i as f32 + 0.5);
            let sx0 = x0 + pad;
            let sx1 = sx0 + LEGEND_SWATCH;
            let stroke = stroke_paint(line.style.color);
            canvas.draw_line((sx0, cy), (sx1, cy), &stroke);
            draw_marker(canvas, line.style.marker, line.style.color, ((sx0 + sx1) * 0.5, cy));
            if let Some(shaper) = &self.shaper {
                shaper.draw_left(canvas, &line.label, sx1 + pad, cy + size * 0.35, size, theme.axis_label, false);
            }
        }
    }
}

impl FigureBackend for SkiaRaster {
    fn draw(&mut self, figure: &Figure) -> Result<()> {
        self.last = Some(self.rasterize(figure)?);
        Ok(())
    }
}

/// Top-left corner of a `w` x `h` legend inside `plot`, choosing the corner
/// covering the fewest data points (upper right, upper left, lower left,
/// lower right on ties).
pub fn legend_origin(plot: RectI32, w: f32, h: f32, pad: f32, points: &[(f32, f32)]) -> (f32, f32) {
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);
    let candidates = [
        (r - pad - w, t + pad),
        (l + pad, t + pad),
        (l + pad, b - pad - h),
        (r - pad - w, b - pad - h),
    ];
    let covered = |(x, y): (f32, f32)| {
        points
            .iter()
            .filter(|&&(px, py)| px >= x && px <= x + w && py >= y && py <= y + h)
            .count()
    };
    candidates
        .into_iter()
        .enumerate()
        .min_by_key(|&(i, c)| (covered(c), i))
        .map(|(_, c)| c)
        .unwrap_or(candidates[0])
}

fn draw_grid(canvas: &skia::Canvas, panel: &Panel, plot: RectI32, xs: &ValueScale, ys: &ValueScale, theme: &Theme) {
    if panel.grid == GridMode::Off {
        return;
    }
    let dashed = panel.grid == GridMode::MajorMinor;
    let (l, t, r, b) = (plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

    let grid_paint = |color: skia::Color| {
        let mut p = skia::Paint::default();
        p.set_color(color);
        p.set_anti_alias(true);
        p.set_style(skia::paint::Style::Stroke);
        p.set_stroke_width(1.0);
        if dashed {
            p.set_path_effect(skia::PathEffect::dash(&[4.0, 3.0], 0.0));
        }
        p
    };

    let x_ticks = panel.x_ticks();
    let y_ticks = panel.y_ticks();

    if panel.grid == GridMode::MajorMinor {
        let minor = grid_paint(theme.grid_minor);
        for y in y_ticks.minor.iter().filter_map(|&v| ys.try_to_px(v)) {
            canvas.draw_line((l, y), (r, y), &minor);
        }
        for x in x_ticks.minor.iter().filter_map(|&v| xs.try_to_px(v)) {
            canvas.draw_line((x, t), (x, b), &minor);
        }
    }

    let major = grid_paint(theme.grid);
    for x in x_ticks.major.iter().filter_map(|&v| xs.try_to_px(v)) {
        canvas.draw_line((x, t), (x, b), &major);
    }
    for y in y_ticks.major.iter().filter_map(|&v| ys.try_to_px(v)) {
        canvas.draw_line((l, y), (r, y), &major);
    }
}

fn stroke_paint(color: skia::Color) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(LINE_WIDTH);
    stroke.set_color(color);
    stroke
}

fn draw_line(canvas: &skia::Canvas, line: &Line, xs: &ValueScale, ys: &ValueScale) {
    let projected = line.project(xs, ys);

    // a point without a position ends the current segment
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for p in &projected {
        match p {
            Some(pt) if pen_down => {
                path.line_to(*pt);
            }
            Some(pt) => {
                path.move_to(*pt);
                pen_down = true;
            }
            None => pen_down = false,
        }
    }
    canvas.draw_path(&path, &stroke_paint(line.style.color));

    for pt in projected.into_iter().flatten() {
        draw_marker(canvas, line.style.marker, line.style.color, pt);
    }
}

fn draw_marker(canvas: &skia::Canvas, marker: Marker, color: skia::Color, (x, y): (f32, f32)) {
    let r = MARKER_RADIUS;
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(color);

    match marker {
        Marker::Circle => {
            canvas.draw_circle((x, y), r, &fill);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_xywh(x - r, y - r, 2.0 * r, 2.0 * r), &fill);
        }
        Marker::Triangle => {
            let mut path = skia::Path::new();
            path.move_to((x, y - r));
            path.line_to((x + r, y + r * 0.8));
            path.line_to((x - r, y + r * 0.8));
            path.close();
            canvas.draw_path(&path, &fill);
        }
        Marker::Diamond => {
            let mut path = skia::Path::new();
            path.move_to((x, y - r * 1.2));
            path.line_to((x + r, y));
            path.line_to((x, y + r * 1.2));
            path.line_to((x - r, y));
            path.close();
            canvas.draw_path(&path, &fill);
        }
        Marker::Cross => {
            let mut stroke = stroke_paint(color);
            stroke.set_stroke_width(1.5);
            canvas.draw_line((x - r, y - r), (x + r, y + r), &stroke);
            canvas.draw_line((x - r, y + r), (x + r, y - r), &stroke);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_prefers_upper_right_when_empty() {
        let plot = RectI32::from_ltrb(0, 0, 400, 300);
        let (x, y) = legend_origin(plot, 100.0, 60.0, 5.0, &[]);
        assert_eq!((x, y), (295.0, 5.0));
    }

    #[test]
    fn legend_moves_away_from_data() {
        let plot = RectI32::from_ltrb(0, 0, 400, 300);
        // points crowd the upper right corner
        let pts = vec![(350.0, 20.0), (380.0, 30.0), (300.0, 40.0)];
        let (x, y) = legend_origin(plot, 100.0, 60.0, 5.0, &pts);
        assert_eq!((x, y), (5.0, 5.0));
    }
}
