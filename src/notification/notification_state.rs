//! Notification state management

use ratatui::style::Color;
use std::time::{Duration, Instant};

/// Notification kind - determines style and how long it stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Confirmations such as "Saved top.v"
    #[default]
    Info,
    /// Recoverable problems such as an invalid config file
    Warning,
    /// Failures the user must acknowledge; stays until the next key press
    Error,
}

impl NotificationKind {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationKind::Info => Some(Duration::from_millis(1500)),
            NotificationKind::Warning => Some(Duration::from_secs(10)),
            NotificationKind::Error => None,
        }
    }

    fn style(self) -> NotificationStyle {
        match self {
            NotificationKind::Info => NotificationStyle {
                fg: Color::White,
                bg: Color::DarkGray,
                border: Color::Gray,
            },
            NotificationKind::Warning => NotificationStyle {
                fg: Color::Black,
                bg: Color::Yellow,
                border: Color::Yellow,
            },
            NotificationKind::Error => NotificationStyle {
                fg: Color::White,
                bg: Color::Red,
                border: Color::LightRed,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationStyle {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub style: NotificationStyle,
    pub created_at: Instant,
    /// None = shown until dismissed
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn new(message: &str, kind: NotificationKind) -> Self {
        Self {
            message: message.to_string(),
            kind,
            style: kind.style(),
            created_at: Instant::now(),
            duration: kind.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.duration
            .is_some_and(|duration| self.created_at.elapsed() > duration)
    }
}

#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_kind(message, NotificationKind::Info);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_kind(message, NotificationKind::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_kind(message, NotificationKind::Error);
    }

    fn show_kind(&mut self, message: &str, kind: NotificationKind) {
        self.current = Some(Notification::new(message, kind));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Drop the current notification if its time is up. Returns true if cleared.
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(notification) = &self.current
            && notification.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}
