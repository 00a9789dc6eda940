use super::*;

fn sections() -> Vec<SectionBounds> {
    vec![
        SectionBounds { id: "home".to_owned(), offset_top: 0.0, height: 900.0 },
        SectionBounds { id: "services".to_owned(), offset_top: 900.0, height: 700.0 },
    ]
}

// =============================================================
// Mobile menu
// =============================================================

#[test]
fn nav_state_default_menu_closed() {
    let state = NavState::default();
    assert!(!state.menu_open);
    assert_eq!(state.body_overflow(), "");
}

#[test]
fn toggle_menu_locks_body_scroll() {
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    assert_eq!(state.body_overflow(), "hidden");
    state.toggle_menu();
    assert!(!state.menu_open);
    assert_eq!(state.body_overflow(), "");
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = NavState::default();
    state.toggle_menu();
    state.close_menu();
    state.close_menu();
    assert!(!state.menu_open);
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn scrolling_down_hides_and_up_shows() {
    let mut state = NavState::default();
    state.on_scroll(150.0, &sections());
    assert!(state.scrolled);
    assert!(state.hidden);
    state.on_scroll(140.0, &sections());
    assert!(!state.hidden);
    assert_eq!(state.scroll_top, 140.0);
}

#[test]
fn active_link_follows_sections() {
    let mut state = NavState::default();
    state.on_scroll(850.0, &sections());
    assert_eq!(state.active_section.as_deref(), Some("services"));
    assert!(state.is_link_active("#services"));
    assert!(!state.is_link_active("#home"));
    assert!(!state.is_link_active("services"));
}

#[test]
fn derived_styles_follow_scroll_position() {
    let mut state = NavState::default();
    assert!(!state.show_scroll_top());
    state.on_scroll(400.0, &sections());
    assert!(state.show_scroll_top());
    assert_eq!(state.parallax_transform(), "translateY(-200px)");
    assert!(state.navbar_style().contains("translateY(-100%)"));
}
