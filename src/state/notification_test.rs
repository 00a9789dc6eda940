use super::*;

/// Drive a banner through its automatic timeline, returning total ms elapsed.
fn run_schedule(state: &mut NotificationState, id: u64) -> u32 {
    let mut elapsed = 0;
    for (delay, step) in auto_schedule() {
        elapsed += delay;
        state.apply(id, step);
    }
    elapsed
}

// =============================================================
// show
// =============================================================

#[test]
fn show_starts_entering() {
    let mut state = NotificationState::default();
    let id = state.show("hello", NotificationKind::Info);
    let current = state.current.as_ref().unwrap();
    assert_eq!(current.id, id);
    assert_eq!(current.message, "hello");
    assert_eq!(current.phase, NotificationPhase::Entering);
}

#[test]
fn show_replaces_existing_immediately() {
    let mut state = NotificationState::default();
    let first = state.show("first", NotificationKind::Info);
    state.reveal(first);
    let second = state.show("second", NotificationKind::Error);
    assert_ne!(first, second);
    let current = state.current.as_ref().unwrap();
    assert_eq!(current.id, second);
    assert_eq!(current.message, "second");
    assert_eq!(current.phase, NotificationPhase::Entering);
}

#[test]
fn steps_for_replaced_banner_are_ignored() {
    let mut state = NotificationState::default();
    let first = state.show("first", NotificationKind::Info);
    let second = state.show("second", NotificationKind::Success);
    assert!(!state.reveal(first));
    assert!(!state.dismiss(first));
    assert!(!state.remove(first));
    assert_eq!(state.current.as_ref().unwrap().id, second);
}

// =============================================================
// lifecycle
// =============================================================

#[test]
fn banner_is_gone_after_auto_dismiss_and_exit() {
    let mut state = NotificationState::default();
    let id = state.show("done", NotificationKind::Success);
    let elapsed = run_schedule(&mut state, id);
    assert_eq!(elapsed, AUTO_DISMISS_MS + EXIT_ANIMATION_MS);
    assert!(!state.is_showing());
}

#[test]
fn banner_is_still_shown_before_auto_dismiss() {
    let mut state = NotificationState::default();
    let id = state.show("done", NotificationKind::Success);
    state.apply(id, NotificationStep::Reveal);
    assert_eq!(state.current.as_ref().unwrap().phase, NotificationPhase::Visible);
    assert!(state.is_showing());
}

#[test]
fn remove_requires_leaving_phase() {
    let mut state = NotificationState::default();
    let id = state.show("x", NotificationKind::Info);
    assert!(!state.remove(id));
    assert!(state.is_showing());
    assert!(state.dismiss(id));
    assert!(state.remove(id));
    assert!(!state.is_showing());
}

#[test]
fn early_dismiss_makes_later_auto_steps_noops() {
    let mut state = NotificationState::default();
    let id = state.show("x", NotificationKind::Info);
    state.reveal(id);
    assert!(state.dismiss(id));
    assert!(!state.dismiss(id));
    assert!(state.remove(id));
    assert!(!state.apply(id, NotificationStep::Remove));
    assert!(!state.is_showing());
}

#[test]
fn dismiss_while_entering_still_animates_out() {
    let mut state = NotificationState::default();
    let id = state.show("x", NotificationKind::Info);
    assert!(state.dismiss(id));
    assert_eq!(state.current.as_ref().unwrap().phase, NotificationPhase::Leaving);
    assert!(!state.reveal(id));
}

#[test]
fn auto_schedule_sums_to_visible_lifetime() {
    let total: u32 = auto_schedule().iter().take(2).map(|(d, _)| d).sum();
    assert_eq!(total, AUTO_DISMISS_MS);
}

// =============================================================
// styling
// =============================================================

#[test]
fn kind_styles_match_palette() {
    assert_eq!(NotificationKind::Success.background(), "#48bb78");
    assert_eq!(NotificationKind::Error.background(), "#f56565");
    assert_eq!(NotificationKind::Info.background(), "#4299e1");
    assert_eq!(NotificationKind::Success.icon_class(), "fas fa-check-circle");
    assert_eq!(NotificationKind::Error.icon_class(), "fas fa-info-circle");
}

#[test]
fn style_reflects_phase() {
    let mut state = NotificationState::default();
    let id = state.show("x", NotificationKind::Error);
    assert!(state.current.as_ref().unwrap().style().contains("opacity: 0"));
    state.reveal(id);
    let style = state.current.as_ref().unwrap().style();
    assert!(style.contains("opacity: 1"));
    assert!(style.contains("translateY(0)"));
    assert!(style.contains("#f56565"));
}
