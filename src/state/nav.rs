//! Navigation bar and page scroll state.
//!
//! DESIGN
//! ======
//! One `NavState` per page owns the mobile menu flag and the last observed
//! scroll position. Scroll-driven components (navbar, parallax hero,
//! scroll-to-top button) derive their looks from it instead of each keeping
//! their own listener.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::util::scroll_math::{self, SectionBounds};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub scroll_top: f64,
    pub scrolled: bool,
    pub hidden: bool,
    pub active_section: Option<String>,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu (link click or click outside).
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Body `overflow` value; page scrolling is locked while the menu is open.
    #[must_use]
    pub fn body_overflow(&self) -> &'static str {
        if self.menu_open { "hidden" } else { "" }
    }

    /// Record a new scroll position and recompute derived flags.
    pub fn on_scroll(&mut self, scroll_top: f64, sections: &[SectionBounds]) {
        self.scrolled = scroll_math::is_scrolled(scroll_top);
        self.hidden = scroll_math::should_hide_navbar(scroll_top, self.scroll_top);
        self.active_section = scroll_math::active_section(scroll_top, sections).map(str::to_owned);
        self.scroll_top = scroll_top;
    }

    #[must_use]
    pub fn is_link_active(&self, href: &str) -> bool {
        match (&self.active_section, href.strip_prefix('#')) {
            (Some(active), Some(target)) => active == target,
            _ => false,
        }
    }

    #[must_use]
    pub fn navbar_style(&self) -> String {
        scroll_math::navbar_style(self.scrolled, self.hidden)
    }

    #[must_use]
    pub fn parallax_transform(&self) -> String {
        format!("translateY({}px)", scroll_math::parallax_offset(self.scroll_top))
    }

    #[must_use]
    pub fn show_scroll_top(&self) -> bool {
        scroll_math::show_scroll_top_button(self.scroll_top)
    }
}
