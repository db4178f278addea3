// Pure sizing and measurement math for the marquee window.
// Kept free of DOM mutation so the arithmetic is unit-testable without a
// rendering surface.

use crate::types::RunMeasurement;

/// Fixed per-item width so exactly `items_visible` originals occupy the
/// visible viewport at rest: floor(visible_width / items_visible).
/// Returns 0 for a non-positive viewport or zero divisor.
pub fn item_width(visible_width: f64, items_visible: u32) -> u32 {
    if visible_width <= 0.0 || items_visible == 0 {
        return 0;
    }
    (visible_width / f64::from(items_visible)).floor() as u32
}

/// True pixel width of one original-length run: the sum of the measured item
/// widths plus `(n - 1)` inter-item gaps. Falls back to `fallback_gap_px`
/// when the computed layout gap is unreadable.
pub fn run_width(measurement: &RunMeasurement, fallback_gap_px: f64) -> f64 {
    let widths: f64 = measurement.item_widths.iter().sum();
    let gap = measurement.gap_px.unwrap_or(fallback_gap_px);
    let gap_count = measurement.item_widths.len().saturating_sub(1) as f64;
    widths + gap * gap_count
}

/// Total window width: both runs laid out side by side with no wrapping.
pub fn window_width(original_run_width: f64) -> f64 {
    original_run_width * 2.0
}

/// Translation target for one loop: offset 0 down to exactly -W, at which
/// point the clone run sits pixel-identical where the original started.
pub fn tween_target(original_run_width: f64) -> f64 {
    -original_run_width
}
