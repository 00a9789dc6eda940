//! Fixed navigation bar: mobile menu, smooth anchor scrolling, active link.

use leptos::prelude::*;

use crate::state::nav::NavState;
use crate::util::dom;

#[derive(Clone, Copy)]
struct NavLink {
    href: &'static str,
    label: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#services", label: "Services" },
    NavLink { href: "#tech", label: "Tech Stack" },
    NavLink { href: "#portfolio", label: "Portfolio" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#contact", label: "Contact" },
];

/// In-page link that scrolls smoothly below the fixed navbar and closes the
/// mobile menu.
#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        dom::scroll_to_anchor(href);
        nav.update(NavState::close_menu);
    };

    view! {
        <a class=class href=href on:click=on_click>
            {children()}
        </a>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let toggle_ref = NodeRef::<leptos::html::Div>::new();
    let menu_ref = NodeRef::<leptos::html::Ul>::new();

    Effect::new(move || dom::set_body_overflow(nav.with(NavState::body_overflow)));

    // Clicks outside both the toggle and the menu close it.
    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::click, move |ev| {
            if !nav.with_untracked(|n| n.menu_open) {
                return;
            }
            let containers = [
                toggle_ref.get_untracked().map(web_sys::Element::from),
                menu_ref.get_untracked().map(web_sys::Element::from),
            ];
            if !dom::event_within(&ev, &containers) {
                nav.update(NavState::close_menu);
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <nav class="navbar" id="navbar" style=move || nav.with(NavState::navbar_style)>
            <div class="nav-container">
                <AnchorLink href="#home" class="nav-logo">
                    <i class="fas fa-cloud"></i>
                    <span>"CloudNinja Solutions"</span>
                </AnchorLink>
                <ul
                    class="nav-menu"
                    id="nav-menu"
                    class:active=move || nav.with(|n| n.menu_open)
                    node_ref=menu_ref
                >
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            let href = link.href;
                            view! {
                                <li class="nav-item">
                                    <a
                                        class="nav-link"
                                        class:active=move || nav.with(|n| n.is_link_active(href))
                                        href=href
                                        on:click=move |ev: leptos::ev::MouseEvent| {
                                            ev.prevent_default();
                                            dom::scroll_to_anchor(href);
                                            nav.update(NavState::close_menu);
                                        }
                                    >
                                        {link.label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div
                    class="nav-toggle"
                    id="mobile-menu"
                    class:active=move || nav.with(|n| n.menu_open)
                    node_ref=toggle_ref
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}
