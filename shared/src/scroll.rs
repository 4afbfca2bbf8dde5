//! Back-to-top visibility rule.

/// Vertical offset, in CSS pixels, from which the back-to-top control shows.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;

/// Whether the back-to-top control should be visible at `scroll_y`.
///
/// Non-finite offsets (which `window.scrollY` never reports, but a failed
/// read may) count as the top of the page.
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y.is_finite() && scroll_y >= BACK_TO_TOP_THRESHOLD_PX
}

/// CSS `display` value for the control.
pub fn display_value(visible: bool) -> &'static str {
    if visible {
        "block"
    } else {
        "none"
    }
}
