// File: crates/chart-core/tests/layout.rs
// Purpose: Tight layout keeps labels inside each panel's column and clear of the plot.

use std::cell::RefCell;

use chart_core::geometry::{split_columns, tight_insets};
use chart_core::grid::format_tick;
use chart_core::types::TextMetrics;
use chart_core::{cvrp_results, ChartRenderer};

// rough glyph advance, avoids depending on installed fonts
fn measure(text: &str, size: f32, _mono: bool) -> f32 {
    text.chars().count() as f32 * size * 0.6
}

#[test]
fn insets_fit_inside_columns() {
    let renderer = ChartRenderer::default();
    let fig = renderer.build_figure(&cvrp_results()).unwrap();
    let m = TextMetrics::default();
    let columns = split_columns(fig.width, fig.height, fig.panels.len(), 0);

    for (panel, col) in fig.panels.iter().zip(&columns) {
        let insets = tight_insets(panel, &m, &measure);
        let plot = col.inset(&insets);
        assert!(plot.width() > col.width() / 2, "{}: plot too narrow", panel.title);
        assert!(plot.height() > col.height() / 2, "{}: plot too short", panel.title);
        assert!(plot.left > col.left && plot.right < col.right);
        // title sits above the plot
        assert!(insets.top as f32 >= m.title);
    }
}

#[test]
fn wider_tick_labels_widen_the_left_inset() {
    let fig = ChartRenderer::default().build_figure(&cvrp_results()).unwrap();
    let m = TextMetrics::default();
    // cost ticks are three digits, linear time ticks reach five
    let cost = tight_insets(&fig.panels[0], &m, &measure);
    let time = tight_insets(&fig.panels[1], &m, &measure);
    assert!(time.left > cost.left);
    assert_eq!(time.bottom, cost.bottom);
}

#[test]
fn tick_labels_are_measured_in_the_numeric_face() {
    let fig = ChartRenderer::default().build_figure(&cvrp_results()).unwrap();
    let panel = &fig.panels[0];
    let calls: RefCell<Vec<(String, bool)>> = RefCell::new(Vec::new());
    let recording = |text: &str, size: f32, mono: bool| {
        calls.borrow_mut().push((text.to_string(), mono));
        measure(text, size, mono)
    };
    tight_insets(panel, &TextMetrics::default(), &recording);

    let calls = calls.into_inner();
    let y_labels: Vec<String> = panel.y_ticks().major.iter().map(|&v| format_tick(v)).collect();
    assert!(!calls.is_empty());
    assert!(calls.iter().all(|(_, mono)| *mono));
    assert!(y_labels.iter().all(|l| calls.iter().any(|(t, _)| t == l)));
}
