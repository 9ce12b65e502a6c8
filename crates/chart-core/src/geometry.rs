// File: crates/chart-core/src/geometry.rs
// Summary: Pixel rectangles, panel tiling and the tight-layout inset pass.

use crate::figure::Panel;
use crate::grid::format_tick;
use crate::types::{Insets, TextMetrics};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Shrink by `insets`, never inverting the rectangle.
    pub fn inset(&self, insets: &Insets) -> Self {
        let left = self.left + insets.left as i32;
        let top = self.top + insets.top as i32;
        let right = (self.right - insets.right as i32).max(left + 1);
        let bottom = (self.bottom - insets.bottom as i32).max(top + 1);
        Self { left, top, right, bottom }
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

/// Tile a `width` x `height` figure into `n` equal columns separated by `gap` pixels.
pub fn split_columns(width: i32, height: i32, n: usize, gap: i32) -> Vec<RectI32> {
    if n == 0 {
        return Vec::new();
    }
    let gaps = gap * (n as i32 - 1);
    let col = ((width - gaps) / n as i32).max(1);
    (0..n as i32)
        .map(|i| RectI32::from_ltwh(i * (col + gap), 0, col, height))
        .collect()
}

/// Insets that keep a panel's title, axis labels and tick labels clear of the
/// plot area and of neighbouring panels. `measure(text, size, mono_numeric)`
/// returns the rendered width of `text` at font `size`; tick labels are
/// measured in the monospaced numeric face they are drawn with.
pub fn tight_insets(panel: &Panel, m: &TextMetrics, measure: &dyn Fn(&str, f32, bool) -> f32) -> Insets {
    let line = |size: f32| size * 1.25;

    let widest_y_tick = panel
        .y_ticks()
        .major
        .iter()
        .map(|&v| measure(&format_tick(v), m.tick, true))
        .fold(0.0f32, f32::max);
    let left = m.pad + line(m.label) + m.pad + widest_y_tick + m.tick_len + m.pad;

    let bottom = m.tick_len + m.pad + line(m.tick) + m.pad + line(m.label) + m.pad;
    let top = m.pad + line(m.title) + m.pad;

    // the last x tick label is centred on the right edge
    let last_x = panel
        .x_ticks()
        .major
        .last()
        .map(|&v| measure(&format_tick(v), m.tick, true) * 0.5)
        .unwrap_or(0.0);
    let right = (m.pad * 2.0).max(last_x + m.pad);

    Insets::new(left.ceil() as u32, right.ceil() as u32, top.ceil() as u32, bottom.ceil() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_tile_without_overlap() {
        let cols = split_columns(1800, 600, 3, 0);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[0], RectI32::from_ltrb(0, 0, 600, 600));
        assert_eq!(cols[2].right, 1800);
        let gapped = split_columns(1000, 300, 3, 20);
        for w in gapped.windows(2) {
            assert!(w[0].right < w[1].left);
        }
    }

    #[test]
    fn inset_never_inverts() {
        let r = RectI32::from_ltwh(0, 0, 50, 50).inset(&Insets::new(40, 40, 40, 40));
        assert!(r.width() >= 1 && r.height() >= 1);
    }
}
