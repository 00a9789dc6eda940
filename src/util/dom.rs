//! Browser glue: scrolling, observers, body style, and page-level hooks.
//!
//! Every helper is a no-op outside the `csr` build so components stay
//! renderable in native tests.
//!
//! TRADE-OFFS
//! ==========
//! Observer and listener closures registered here live for the whole page.
//! They are leaked with `forget()` instead of being tracked, since the site is
//! a single page that never unmounts its sections.

#[cfg(feature = "csr")]
use std::{cell::RefCell, rc::Rc};

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

#[cfg(feature = "csr")]
use crate::util::reveal::{REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use crate::util::scroll_math::SectionBounds;
#[cfg(feature = "csr")]
use crate::util::scroll_math::anchor_scroll_target;

const SERVICE_WORKER_URL: &str = "/sw.js";

/// Log uncaught script errors through the `log` facade.
pub fn install_error_logger() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(|ev: web_sys::ErrorEvent| {
            log::error!("uncaught error: {} ({}:{})", ev.message(), ev.filename(), ev.lineno());
        });
        if window
            .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
            .is_ok()
        {
            on_error.forget();
        }
    }
}

/// Register the offline service worker when the browser supports it.
pub fn register_service_worker() {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator = window.navigator();
        let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
        if !supported {
            log::debug!("service workers unsupported");
            return;
        }
        let pending = navigator.service_worker().register(SERVICE_WORKER_URL);
        wasm_bindgen_futures::spawn_local(async move {
            match wasm_bindgen_futures::JsFuture::from(pending).await {
                Ok(_) => log::info!("service worker registered: {SERVICE_WORKER_URL}"),
                Err(err) => log::warn!("service worker registration failed: {err:?}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = SERVICE_WORKER_URL;
    }
}

/// Current vertical scroll position in pixels.
pub fn scroll_top() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Smoothly scroll the window to `top`.
pub fn smooth_scroll_to(top: f64) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = top;
    }
}

/// Scroll to the section an in-page `#id` link points at, leaving room for
/// the fixed navbar. Returns `false` when there is no such section.
pub fn scroll_to_anchor(href: &str) -> bool {
    let Some(id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
        return false;
    };
    #[cfg(feature = "csr")]
    {
        let section = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        match section {
            Some(section) => {
                smooth_scroll_to(anchor_scroll_target(f64::from(section.offset_top())));
                true
            }
            None => {
                log::debug!("no section for anchor #{id}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        false
    }
}

/// Offsets of every `<section id=...>` on the page, in document order.
pub fn section_bounds() -> Vec<SectionBounds> {
    #[cfg(feature = "csr")]
    {
        let Some(nodes) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector_all("section[id]").ok())
        else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
            .map(|el| SectionBounds {
                id: el.id(),
                offset_top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
            .collect()
    }
    #[cfg(not(feature = "csr"))]
    {
        Vec::new()
    }
}

/// Set `overflow` on `<body>`; the open mobile menu locks page scrolling.
pub fn set_body_overflow(value: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.style().set_property("overflow", value);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = value;
    }
}

/// Whether the event's target is inside any of `containers`.
#[cfg(feature = "csr")]
pub fn event_within(ev: &web_sys::Event, containers: &[Option<web_sys::Element>]) -> bool {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok()) else {
        return false;
    };
    containers.iter().flatten().any(|el| el.contains(Some(&target)))
}

/// Run `on_enter` the first time `element` scrolls into view, using the
/// reveal threshold and root margin. Falls back to running immediately when
/// `IntersectionObserver` cannot be created.
#[cfg(feature = "csr")]
pub fn observe_once(element: &web_sys::Element, on_enter: impl FnOnce() + 'static) {
    observe_once_with(element, REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, on_enter);
}

/// [`observe_once`] with an explicit threshold and margin.
#[cfg(feature = "csr")]
pub fn observe_once_with(
    element: &web_sys::Element,
    threshold: f64,
    root_margin: &str,
    on_enter: impl FnOnce() + 'static,
) {
    let pending: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Some(Box::new(on_enter))));
    let fire = Rc::clone(&pending);
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            let entered = entries.iter().any(|entry| {
                entry
                    .dyn_into::<web_sys::IntersectionObserverEntry>()
                    .is_ok_and(|entry| entry.is_intersecting())
            });
            if !entered {
                return;
            }
            observer.disconnect();
            let run = fire.borrow_mut().take();
            if let Some(run) = run {
                run();
            }
        },
    );

    let init = web_sys::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);

    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            callback.forget();
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable: {err:?}");
            drop(callback);
            let run = pending.borrow_mut().take();
            if let Some(run) = run {
                run();
            }
        }
    }
}
