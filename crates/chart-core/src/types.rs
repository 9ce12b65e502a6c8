// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, paddings, text sizes).

/// Default figure width in pixels (three panels side by side).
pub const WIDTH: i32 = 1800;
/// Default figure height in pixels.
pub const HEIGHT: i32 = 600;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 40, 56)
    }
}

/// Text sizes and spacing used by layout and drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub title: f32,
    pub label: f32,
    pub tick: f32,
    pub legend: f32,
    /// Gap between stacked elements (title, labels, tick text).
    pub pad: f32,
    /// Length of tick marks outside the plot area.
    pub tick_len: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self { title: 18.0, label: 14.0, tick: 12.0, legend: 12.0, pad: 6.0, tick_len: 5.0 }
    }
}
