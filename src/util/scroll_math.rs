//! Scroll-position math for the navbar, section tracking, and parallax.
//!
//! All inputs are plain pixel values read from the DOM by the caller, so
//! the thresholds can be tested without a browser.

#[cfg(test)]
#[path = "scroll_math_test.rs"]
mod scroll_math_test;

/// Height of the fixed navbar; anchor targets land this far below the top.
pub const NAVBAR_OFFSET_PX: f64 = 70.0;
/// Past this offset the navbar switches to its opaque style.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;
/// Scrolling down past this offset hides the navbar.
pub const HIDE_THRESHOLD_PX: f64 = 100.0;
/// A section counts as current once the viewport top is this close to it.
pub const SECTION_PROBE_OFFSET_PX: f64 = 100.0;
/// Past this offset the scroll-to-top button appears.
pub const SCROLL_TOP_BUTTON_THRESHOLD_PX: f64 = 300.0;
/// Hero visual moves at this fraction of the scroll distance.
pub const PARALLAX_RATE: f64 = -0.5;

/// Position of one `section[id]` element.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

/// Scroll target for an in-page anchor whose section starts at `offset_top`.
#[must_use]
pub fn anchor_scroll_target(offset_top: f64) -> f64 {
    offset_top - NAVBAR_OFFSET_PX
}

#[must_use]
pub fn is_scrolled(scroll_top: f64) -> bool {
    scroll_top > SCROLLED_THRESHOLD_PX
}

/// Hide while moving down past the threshold; show on any upward move.
#[must_use]
pub fn should_hide_navbar(scroll_top: f64, last_scroll_top: f64) -> bool {
    scroll_top > last_scroll_top && scroll_top > HIDE_THRESHOLD_PX
}

/// Id of the section under the probe line. Later sections win on overlap.
#[must_use]
pub fn active_section(scroll_top: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|section| {
            let top = section.offset_top - SECTION_PROBE_OFFSET_PX;
            scroll_top >= top && scroll_top < top + section.height
        })
        .map(|section| section.id.as_str())
}

#[must_use]
pub fn parallax_offset(scroll_top: f64) -> f64 {
    scroll_top * PARALLAX_RATE
}

#[must_use]
pub fn show_scroll_top_button(scroll_top: f64) -> bool {
    scroll_top > SCROLL_TOP_BUTTON_THRESHOLD_PX
}

/// Inline navbar style for the current scroll state.
#[must_use]
pub fn navbar_style(scrolled: bool, hidden: bool) -> String {
    let (background, shadow) = if scrolled {
        ("rgba(255, 255, 255, 0.98)", "0 2px 20px rgba(0, 0, 0, 0.1)")
    } else {
        ("rgba(255, 255, 255, 0.95)", "none")
    };
    let offset = if hidden { "-100%" } else { "0" };
    format!("background: {background}; box-shadow: {shadow}; transform: translateY({offset});")
}
