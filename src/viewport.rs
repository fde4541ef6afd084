// Pure viewport arithmetic shared by the DOM and event layers.

/// Canvas backing size for a CSS box at the given device pixel ratio, with
/// the ratio capped at `max_ratio`. Never returns a zero dimension.
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64, max_ratio: f64) -> (u32, u32) {
    let ratio = if dpr.is_finite() && dpr > 0.0 {
        dpr.min(max_ratio)
    } else {
        1.0
    };
    let w = (css_width.max(0.0) * ratio) as u32;
    let h = (css_height.max(0.0) * ratio) as u32;
    (w.max(1), h.max(1))
}

/// Document scroll fraction in [0, 1] for a scroll offset in pixels.
pub fn scroll_fraction(scroll_y: f64, document_height: f64, viewport_height: f64) -> f32 {
    let max = document_height - viewport_height;
    if max.is_nan() || max <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / max).clamp(0.0, 1.0) as f32
}

/// Height (percent) of the timeline progress bar with `index` of `count`
/// chapters highlighted.
pub fn progress_percent(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    (index.min(count - 1) as f64 / (count - 1) as f64) * 100.0
}
