//! Notification timers.
//!
//! Wraps [`NotificationState`] transitions with the reveal, auto-dismiss, and
//! exit-animation delays. Without the `csr` feature only the state change
//! happens; no timers run.

use leptos::prelude::*;

use crate::state::notification::{NotificationKind, NotificationState};
#[cfg(feature = "csr")]
use crate::state::notification::{EXIT_ANIMATION_MS, NotificationStep, auto_schedule};

/// Show a banner, replacing any current one, and start its timeline.
pub fn show(notifications: RwSignal<NotificationState>, message: impl Into<String>, kind: NotificationKind) {
    let message = message.into();
    log::info!("notification ({kind:?}): {message}");
    let Some(id) = notifications.try_update(|n| n.show(message, kind)) else {
        return;
    };

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        for (delay, step) in auto_schedule() {
            sleep_ms(delay).await;
            let still_current = notifications
                .try_with_untracked(|n| n.current.as_ref().is_some_and(|c| c.id == id))
                .unwrap_or(false);
            if !still_current {
                break;
            }
            notifications.update(|n| {
                n.apply(id, step);
            });
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Close a banner early; it still animates out before removal.
pub fn dismiss(notifications: RwSignal<NotificationState>, id: u64) {
    let started = notifications.try_update(|n| n.dismiss(id)).unwrap_or(false);
    if !started {
        return;
    }

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        sleep_ms(EXIT_ANIMATION_MS).await;
        notifications.try_update(|n| n.apply(id, NotificationStep::Remove));
    });
}

#[cfg(feature = "csr")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}
