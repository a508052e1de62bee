// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// How long a toast stays on screen before dismissing itself.
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_millis(5000);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity determines the accent styling of the toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed (green accent).
    #[default]
    Success,
    /// Validation failure or recoverable error (red accent).
    Danger,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Danger => palette::DANGER_500,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification message, resolved at render time.
    message_key: String,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            created_at: Instant::now(),
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates a danger notification.
    pub fn danger(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Danger, message_key)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Returns the age of this notification as of `now`.
    #[must_use]
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    /// Whether the 5-second display window has elapsed as of `now`.
    #[must_use]
    pub fn should_auto_dismiss(&self, now: Instant) -> bool {
        self.age(now) >= AUTO_DISMISS_AFTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Success.color(), Severity::Danger.color());
    }

    #[test]
    fn constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::danger("").severity(), Severity::Danger);
    }

    #[test]
    fn fresh_notification_does_not_auto_dismiss() {
        let notification = Notification::danger("notification-form-missing-fields");
        assert!(!notification.should_auto_dismiss(Instant::now()));
    }

    #[test]
    fn notification_auto_dismisses_once_its_window_elapses() {
        let notification = Notification::success("notification-form-success");
        let later = Instant::now() + AUTO_DISMISS_AFTER;
        assert!(notification.should_auto_dismiss(later));
    }

    #[test]
    fn age_is_zero_for_an_instant_before_creation() {
        let earlier = Instant::now();
        let notification = Notification::success("notification-form-success");
        assert_eq!(notification.age(earlier), Duration::ZERO);
    }
}
