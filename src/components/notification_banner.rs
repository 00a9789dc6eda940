//! Fixed banner for the current notification, if any.
//!
//! The element is keyed by notification id so phase changes only restyle it
//! and the CSS transition can play.

use leptos::prelude::*;

use crate::state::notification::{ActiveNotification, NotificationState};
use crate::util::notify;

#[component]
pub fn NotificationBanner() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let current_id = Memo::new(move |_| notifications.with(|n| n.current.as_ref().map(|c| c.id)));

    move || {
        let id = current_id.get()?;
        let (message, kind) =
            notifications.with_untracked(|n| n.current.as_ref().map(|c| (c.message.clone(), c.kind)))?;
        let style = move || {
            notifications.with(|n| {
                n.current
                    .as_ref()
                    .filter(|c| c.id == id)
                    .map(ActiveNotification::style)
                    .unwrap_or_default()
            })
        };

        Some(view! {
            <div class=format!("notification {}", kind.css_modifier()) style=style role="status">
                <div class="notification-content">
                    <i class=kind.icon_class()></i>
                    <span>{message}</span>
                    <button
                        class="notification-close"
                        title="Dismiss"
                        on:click=move |_| notify::dismiss(notifications, id)
                    >
                        "×"
                    </button>
                </div>
            </div>
        })
    }
}
