//! Root application component and shared state providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::notification_banner::NotificationBanner;
use crate::components::setup_guide_modal::SetupGuideModal;
use crate::net::emailjs::SetupSummary;
use crate::pages::home::HomePage;
use crate::state::{contact_form::ContactFormState, nav::NavState, notification::NotificationState};

pub const PAGE_TITLE: &str = "CloudNinja Solutions | Cloud & DevOps Consulting";

/// Root application component.
///
/// Provides the page-wide state signals and installs the frame-throttled
/// scroll listener that feeds `NavState`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    let notifications = RwSignal::new(NotificationState::default());
    let contact_form = RwSignal::new(ContactFormState::default());
    let setup_guide = RwSignal::new(None::<SetupSummary>);

    provide_context(nav);
    provide_context(notifications);
    provide_context(contact_form);
    provide_context(setup_guide);

    #[cfg(feature = "csr")]
    install_scroll_tracking(nav);

    let close_guide = Callback::new(move |()| setup_guide.set(None));

    view! {
        <Title text=PAGE_TITLE />
        <HomePage />
        <NotificationBanner />
        {move || {
            setup_guide.get().map(|summary| view! { <SetupGuideModal summary=summary on_close=close_guide /> })
        }}
    }
}

/// At most one `NavState` update per animation frame, however many scroll
/// events arrive.
#[cfg(feature = "csr")]
fn install_scroll_tracking(nav: RwSignal<NavState>) {
    let frame_pending = StoredValue::new(false);

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        if frame_pending.get_value() {
            return;
        }
        frame_pending.set_value(true);
        request_animation_frame(move || {
            let top = crate::util::dom::scroll_top();
            let sections = crate::util::dom::section_bounds();
            nav.update(|n| n.on_scroll(top, &sections));
            frame_pending.set_value(false);
        });
    });
    on_cleanup(move || handle.remove());
}
