//! Floating button that returns to the top of the page.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::util::dom;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let visible = move || nav.with(NavState::show_scroll_top);

    view! {
        <button
            class="scroll-to-top"
            title="Back to top"
            style:opacity=move || if visible() { "1" } else { "0" }
            style:transform=move || if visible() { "translateY(0)" } else { "translateY(100px)" }
            on:click=move |_| dom::smooth_scroll_to(0.0)
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
