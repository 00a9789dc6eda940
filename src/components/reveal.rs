//! Wrapper that fades its children in the first time they scroll into view.

use leptos::prelude::*;

use crate::util::reveal::reveal_style;

/// `index` is the element's position among all animated elements on the
/// page and sets its stagger delay.
#[component]
pub fn Reveal(
    index: usize,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] on_reveal: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let revealed = RwSignal::new(false);
    let el_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(el) = el_ref.get() else {
            return;
        };
        crate::util::dom::observe_once(&el, move || {
            revealed.set(true);
            if let Some(on_reveal) = on_reveal {
                on_reveal.run(());
            }
        });
    });
    #[cfg(not(feature = "csr"))]
    let _ = on_reveal;

    view! {
        <div
            class=class
            node_ref=el_ref
            style=move || reveal_style(index, revealed.get())
        >
            {children()}
        </div>
    }
}
