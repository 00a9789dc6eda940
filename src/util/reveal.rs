//! Reveal-on-scroll styling.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Fraction of the element that must be visible to reveal it.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so elements reveal slightly after entering.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Transition delay for the `index`-th animated element, 0.1 s apart.
#[must_use]
pub fn stagger_delay(index: usize) -> String {
    format!("{}.{}s", index / 10, index % 10)
}

/// Inline style for an animated element before and after it is revealed.
#[must_use]
pub fn reveal_style(index: usize, revealed: bool) -> String {
    let (opacity, offset) = if revealed { (1, "0") } else { (0, "30px") };
    format!(
        "opacity: {opacity}; transform: translateY({offset}); transition: all 0.6s ease {};",
        stagger_delay(index)
    )
}

/// Animation applied to a hovered tech-stack item.
pub const PULSE_ANIMATION: &str = "pulse 0.6s ease-in-out";

/// Notification text for a clicked tech-stack item.
#[must_use]
pub fn tech_click_message(tech: &str) -> Option<String> {
    let tech = tech.trim();
    (!tech.is_empty()).then(|| format!("Learn more about {tech} in our services!"))
}
