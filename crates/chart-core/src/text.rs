// File: crates/chart-core/src/text.rs
// Summary: Simple text shaper/renderer using Skia textlayout with sensible defaults.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono_numeric {
            // Prefer monospaced/tabular-number families for numeric alignment
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, mono_numeric);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono_numeric: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), mono_numeric);
        // width of the longest line
        p.longest_line()
    }

    /// Draw with the baseline at `y`, starting at `x`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, mono_numeric: bool) {
        let mut p = self.layout(text, size, color, mono_numeric);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw horizontally centred on `cx`, baseline at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color, mono_numeric: bool) {
        let mut p = self.layout(text, size, color, mono_numeric);
        let w = p.longest_line();
        p.paint(canvas, (cx - w * 0.5, y - size * 0.8));
    }

    /// Draw right-aligned so the text ends at `right`, baseline at `y`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, y: f32, size: f32, color: skia::Color, mono_numeric: bool) {
        let mut p = self.layout(text, size, color, mono_numeric);
        let w = p.longest_line();
        p.paint(canvas, (right - w, y - size * 0.8));
    }

    /// Draw rotated 90 degrees counter-clockwise, centred on (`cx`, `cy`). Used for y-axis labels.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color, false);
        let w = p.longest_line();
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-w * 0.5, -size * 0.6));
        canvas.restore();
    }
}
