use super::*;

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds { id: "home".to_owned(), offset_top: 0.0, height: 800.0 },
        SectionBounds { id: "services".to_owned(), offset_top: 800.0, height: 600.0 },
        SectionBounds { id: "contact".to_owned(), offset_top: 1400.0, height: 500.0 },
    ]
}

// =============================================================
// navbar
// =============================================================

#[test]
fn scrolled_style_starts_past_fifty_pixels() {
    assert!(!is_scrolled(50.0));
    assert!(is_scrolled(51.0));
}

#[test]
fn navbar_hides_only_when_moving_down_past_threshold() {
    assert!(should_hide_navbar(150.0, 120.0));
    assert!(!should_hide_navbar(90.0, 60.0));
    assert!(!should_hide_navbar(150.0, 200.0));
    assert!(!should_hide_navbar(150.0, 150.0));
}

#[test]
fn navbar_style_switches_background_and_transform() {
    let top = navbar_style(false, false);
    assert!(top.contains("rgba(255, 255, 255, 0.95)"));
    assert!(top.contains("box-shadow: none"));
    assert!(top.contains("translateY(0)"));

    let scrolled_hidden = navbar_style(true, true);
    assert!(scrolled_hidden.contains("rgba(255, 255, 255, 0.98)"));
    assert!(scrolled_hidden.contains("0 2px 20px rgba(0, 0, 0, 0.1)"));
    assert!(scrolled_hidden.contains("translateY(-100%)"));
}

// =============================================================
// sections / anchors
// =============================================================

#[test]
fn anchor_target_clears_fixed_navbar() {
    assert_eq!(anchor_scroll_target(800.0), 730.0);
}

#[test]
fn active_section_uses_probe_offset() {
    let sections = sections();
    assert_eq!(active_section(0.0, &sections), Some("home"));
    assert_eq!(active_section(699.0, &sections), Some("home"));
    assert_eq!(active_section(700.0, &sections), Some("services"));
    assert_eq!(active_section(1300.0, &sections), Some("contact"));
}

#[test]
fn active_section_none_past_last_section() {
    assert_eq!(active_section(5_000.0, &sections()), None);
}

#[test]
fn active_section_later_section_wins_on_overlap() {
    let overlapping = vec![
        SectionBounds { id: "a".to_owned(), offset_top: 0.0, height: 1_000.0 },
        SectionBounds { id: "b".to_owned(), offset_top: 300.0, height: 300.0 },
    ];
    assert_eq!(active_section(250.0, &overlapping), Some("b"));
}

// =============================================================
// parallax / scroll-to-top
// =============================================================

#[test]
fn parallax_moves_at_half_speed_upward() {
    assert_eq!(parallax_offset(200.0), -100.0);
    assert_eq!(parallax_offset(0.0), 0.0);
}

#[test]
fn scroll_top_button_appears_past_threshold() {
    assert!(!show_scroll_top_button(300.0));
    assert!(show_scroll_top_button(301.0));
}
