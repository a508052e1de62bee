// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications carry an i18n message key and a severity; the manager
//! handles queuing and auto-dismiss timing; the toast module renders them.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
