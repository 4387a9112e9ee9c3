//! Notification state management

use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme;

/// Notification type - determines style and duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationType {
    /// Confirmations like "Copied!" - short duration
    #[default]
    Info,
    /// Warnings like invalid config - long duration
    Warning,
}

impl NotificationType {
    fn duration(self) -> Duration {
        match self {
            NotificationType::Info => Duration::from_millis(1500),
            NotificationType::Warning => Duration::from_secs(10),
        }
    }

    fn style(self) -> NotificationStyle {
        match self {
            NotificationType::Info => NotificationStyle {
                fg: theme::palette::TEXT,
                bg: Color::DarkGray,
                border: Color::Gray,
            },
            NotificationType::Warning => NotificationStyle {
                fg: Color::Black,
                bg: theme::palette::WARNING,
                border: theme::palette::WARNING,
            },
        }
    }
}

/// Style configuration for a notification
#[derive(Debug, Clone)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

/// A single notification with message, timing, and style
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    fn with_type(message: &str, notification_type: NotificationType) -> Self {
        Self {
            message: message.to_string(),
            style: notification_type.style(),
            created_at: Instant::now(),
            duration: notification_type.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.duration
    }
}

/// Notification state manager for the application
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show an info notification (gray, 1.5s)
    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Info));
    }

    /// Show a warning notification (yellow, 10s)
    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::with_type(message, NotificationType::Warning));
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Drop the current notification if its duration has elapsed
    ///
    /// Returns true if a notification was cleared (the UI needs a redraw).
    pub fn clear_if_expired(&mut self) -> bool {
        if self.current.as_ref().is_some_and(|n| n.is_expired()) {
            self.current = None;
            return true;
        }
        false
    }
}
