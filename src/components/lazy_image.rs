//! Image that only loads its source once it scrolls into view.

use leptos::prelude::*;

#[component]
pub fn LazyImage(src: &'static str, alt: &'static str) -> impl IntoView {
    let loaded = RwSignal::new(false);
    let img_ref = NodeRef::<leptos::html::Img>::new();

    #[cfg(feature = "csr")]
    Effect::new(move || {
        let Some(img) = img_ref.get() else {
            return;
        };
        // Default observer options: any visible pixel loads the image.
        crate::util::dom::observe_once_with(&img, 0.0, "0px", move || loaded.set(true));
    });
    #[cfg(not(feature = "csr"))]
    loaded.set(true);

    view! {
        <img
            class:lazy=move || !loaded.get()
            data-src=src
            src=move || loaded.get().then_some(src)
            alt=alt
            node_ref=img_ref
        />
    }
}
