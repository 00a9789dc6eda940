use super::*;

#[test]
fn stagger_delay_steps_by_tenths() {
    assert_eq!(stagger_delay(0), "0.0s");
    assert_eq!(stagger_delay(3), "0.3s");
    assert_eq!(stagger_delay(12), "1.2s");
}

#[test]
fn hidden_style_offsets_and_fades() {
    let style = reveal_style(2, false);
    assert!(style.contains("opacity: 0"));
    assert!(style.contains("translateY(30px)"));
    assert!(style.contains("all 0.6s ease 0.2s"));
}

#[test]
fn revealed_style_keeps_stagger() {
    let style = reveal_style(2, true);
    assert!(style.contains("opacity: 1"));
    assert!(style.contains("translateY(0)"));
    assert!(style.contains("0.2s"));
}

#[test]
fn tech_click_message_needs_a_name() {
    assert_eq!(
        tech_click_message("Kubernetes").as_deref(),
        Some("Learn more about Kubernetes in our services!")
    );
    assert_eq!(tech_click_message("  "), None);
}
