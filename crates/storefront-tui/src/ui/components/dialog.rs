//! Two-choice dialog component

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::ui::{layout::centered_rect_fixed, Theme};

/// One button of a dialog
pub struct DialogButton<'a> {
    /// Key that triggers the button
    pub key: &'a str,
    pub label: &'a str,
}

/// Modal dialog with a message and two buttons
pub struct Dialog<'a> {
    pub title: &'a str,
    pub message: &'a str,
    /// Dismissive choice, rendered first
    pub secondary: DialogButton<'a>,
    /// Affirmative choice
    pub primary: DialogButton<'a>,
    /// Destructive gate rather than an acknowledgment
    pub dangerous: bool,
}

impl<'a> Dialog<'a> {
    /// Render the dialog centered over `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect_fixed(48, 9, area);

        frame.render_widget(Clear, dialog_area);

        let border_style = if self.dangerous {
            theme.danger()
        } else {
            theme.border_focused()
        };

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(if self.dangerous {
                theme.danger()
            } else {
                theme.success()
            })
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(2), Constraint::Length(1)])
            .split(inner);

        let message_widget = Paragraph::new(self.message)
            .style(theme.text())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(message_widget, chunks[0]);

        let primary_style = if self.dangerous {
            theme.danger()
        } else {
            theme.chip(true)
        };
        let buttons = Line::from(vec![
            Span::styled(format!("[{}]", self.secondary.key), theme.text_highlight()),
            Span::styled(format!(" {}    ", self.secondary.label), theme.text_secondary()),
            Span::styled(format!("[{}]", self.primary.key), theme.text_highlight()),
            Span::styled(format!(" {} ", self.primary.label), primary_style),
        ]);
        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            chunks[1],
        );
    }
}
