//! Toast notification component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::Theme;

/// Notification severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Warning,
}

/// Toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// Message to display
    pub message: String,
    /// Severity level
    pub level: NotificationLevel,
    /// Remaining ticks until dismissal
    pub ttl: u64,
}

impl Notification {
    /// Create a new notification
    pub fn new(message: impl Into<String>, level: NotificationLevel, ttl: u64) -> Self {
        Self {
            message: message.into(),
            level,
            ttl,
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info, 30) // ~3 seconds at 100ms ticks
    }

    /// Create a warning notification
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning, 50) // ~5 seconds
    }

    /// Check if notification should be dismissed
    pub fn is_expired(&self) -> bool {
        self.ttl == 0
    }

    /// Decrement TTL
    pub fn tick(&mut self) {
        self.ttl = self.ttl.saturating_sub(1);
    }

    pub fn icon(&self) -> &'static str {
        match self.level {
            NotificationLevel::Info => "ℹ",
            NotificationLevel::Warning => "⚠",
        }
    }

    /// Render the notification at the top-right of `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let style = match self.level {
            NotificationLevel::Info => theme.info(),
            NotificationLevel::Warning => theme.warning(),
        };

        let text = format!("{} {}", self.icon(), self.message);
        let width = (text.width() as u16 + 4).min(area.width).min(60);
        let height = 3.min(area.height.saturating_sub(1));
        if width == 0 || height == 0 {
            return;
        }
        let x = area.x + area.width.saturating_sub(width + 2);
        let toast_area = Rect::new(x, area.y + 1, width, height);

        frame.render_widget(Clear, toast_area);

        let block = Block::default().borders(Borders::ALL).border_style(style);
        let content = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(block);

        frame.render_widget(content, toast_area);
    }
}

/// Notification manager for multiple toasts
#[derive(Debug)]
pub struct NotificationManager {
    notifications: Vec<Notification>,
    max_visible: usize,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            max_visible: 3,
        }
    }

    /// Add a notification, keeping only the most recent
    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(message = %notification.message, "toast");
        self.notifications.push(notification);
        while self.notifications.len() > self.max_visible {
            self.notifications.remove(0);
        }
    }

    /// Tick all notifications and remove expired
    pub fn tick(&mut self) {
        for n in &mut self.notifications {
            n.tick();
        }
        self.notifications.retain(|n| !n.is_expired());
    }

    pub fn active(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Render all active notifications
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        for (i, notification) in self.notifications.iter().enumerate() {
            let offset_y = (i * 4) as u16;
            if offset_y >= area.height {
                break;
            }
            let adjusted_area = Rect::new(
                area.x,
                area.y + offset_y,
                area.width,
                area.height - offset_y,
            );
            notification.render(frame, adjusted_area, theme);
        }
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}
