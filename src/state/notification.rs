//! Single-slot notification banner state.
//!
//! DESIGN
//! ======
//! At most one banner exists. `show` replaces the current one immediately and
//! hands out a fresh id; timer steps carry that id so a late step for a
//! replaced banner is a no-op. The timers themselves live in
//! `util::notify`, this module only moves banners through their phases:
//!
//! `Entering -> Visible -> Leaving -> (removed)`
//!
//! Dismissal from any phase goes through `Leaving` so the exit animation
//! always plays.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// Delay before an entering banner animates in.
pub const REVEAL_DELAY_MS: u32 = 100;
/// Time from `show` until the banner starts leaving on its own.
pub const AUTO_DISMISS_MS: u32 = 5_000;
/// Length of the exit animation before removal.
pub const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Info | NotificationKind::Error => "fas fa-info-circle",
        }
    }

    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Info => "#4299e1",
            NotificationKind::Success => "#48bb78",
            NotificationKind::Error => "#f56565",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationPhase {
    Entering,
    Visible,
    Leaving,
}

/// Scheduled transitions for one banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationStep {
    Reveal,
    Dismiss,
    Remove,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveNotification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: NotificationPhase,
}

impl ActiveNotification {
    /// Inline style for the banner's current phase.
    #[must_use]
    pub fn style(&self) -> String {
        let (opacity, offset) = match self.phase {
            NotificationPhase::Visible => (1, "0"),
            NotificationPhase::Entering | NotificationPhase::Leaving => (0, "-20px"),
        };
        format!(
            "background: {}; opacity: {opacity}; transform: translateY({offset});",
            self.kind.background()
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub current: Option<ActiveNotification>,
    next_id: u64,
}

impl NotificationState {
    /// Replace any current banner with a new one. Returns its id.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(ActiveNotification {
            id,
            message: message.into(),
            kind,
            phase: NotificationPhase::Entering,
        });
        id
    }

    /// Apply a timer or user step. Returns whether anything changed.
    pub fn apply(&mut self, id: u64, step: NotificationStep) -> bool {
        match step {
            NotificationStep::Reveal => self.reveal(id),
            NotificationStep::Dismiss => self.dismiss(id),
            NotificationStep::Remove => self.remove(id),
        }
    }

    pub fn reveal(&mut self, id: u64) -> bool {
        match self.current_mut(id) {
            Some(n) if n.phase == NotificationPhase::Entering => {
                n.phase = NotificationPhase::Visible;
                true
            }
            _ => false,
        }
    }

    /// Start the exit animation. Already-leaving banners are left alone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.current_mut(id) {
            Some(n) if n.phase != NotificationPhase::Leaving => {
                n.phase = NotificationPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Drop the banner once its exit animation is done.
    pub fn remove(&mut self, id: u64) -> bool {
        let leaving = self
            .current
            .as_ref()
            .is_some_and(|n| n.id == id && n.phase == NotificationPhase::Leaving);
        if leaving {
            self.current = None;
        }
        leaving
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.current.is_some()
    }

    fn current_mut(&mut self, id: u64) -> Option<&mut ActiveNotification> {
        self.current.as_mut().filter(|n| n.id == id)
    }
}

/// Timeline for a freshly shown banner as `(delay_from_previous_ms, step)`.
#[must_use]
pub fn auto_schedule() -> [(u32, NotificationStep); 3] {
    [
        (REVEAL_DELAY_MS, NotificationStep::Reveal),
        (AUTO_DISMISS_MS - REVEAL_DELAY_MS, NotificationStep::Dismiss),
        (EXIT_ANIMATION_MS, NotificationStep::Remove),
    ]
}
