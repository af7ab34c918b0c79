//! # Notifications Widget
//!
//! Toast notification system using egui-notify for mint confirmations and
//! status updates.

use egui_notify::Toasts;

use crate::app::events::NotifyLevel;

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a toast of the given severity
    pub fn push(&mut self, level: NotifyLevel, message: String) {
        match level {
            NotifyLevel::Success => {
                self.toasts.success(message);
            }
            NotifyLevel::Error => {
                self.toasts.error(message);
            }
            NotifyLevel::Warning => {
                self.toasts.warning(message);
            }
            NotifyLevel::Info => {
                self.toasts.info(message);
            }
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
