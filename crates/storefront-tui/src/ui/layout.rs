//! Layout helpers for consistent screen structure

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use super::Theme;

/// Standard screen layout with header, content, and footer
pub struct ScreenLayout {
    /// Header area
    pub header: Rect,
    /// Main content area
    pub content: Rect,
    /// Footer/help area
    pub footer: Rect,
}

impl ScreenLayout {
    /// Create a standard layout from the total area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(6),    // Content
                Constraint::Length(2), // Footer
            ])
            .split(area);

        Self {
            header: chunks[0],
            content: chunks[1],
            footer: chunks[2],
        }
    }
}

/// Create a fixed-size centered box
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render a standard header bar
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    breadcrumb: &str,
    action: Option<Line<'_>>,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border())
        .style(Style::default().bg(theme.surface));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(20),
            Constraint::Length(20),
        ])
        .split(inner);

    let logo = Paragraph::new(format!(" {} STOREFRONT", '\u{25C6}')).style(theme.text_highlight());
    frame.render_widget(logo, chunks[0]);

    let breadcrumb_text = Paragraph::new(breadcrumb)
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(breadcrumb_text, chunks[1]);

    // Screen action (favorite, edit) or the clock
    let right = action.unwrap_or_else(|| {
        Line::styled(chrono::Local::now().format("%H:%M ").to_string(), theme.text_muted())
    });
    frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), chunks[2]);
}

/// Render a standard footer with help hints
pub fn render_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!("[{}]", key), theme.text_highlight()),
                Span::styled(format!(" {}  ", action), theme.text_muted()),
            ]
        })
        .collect();

    let footer = Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center);
    frame.render_widget(footer, inner);
}

/// Create a section block with title
pub fn section_block<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .title_style(theme.text_highlight())
        .borders(Borders::ALL)
        .border_style(theme.border())
}

/// Create a section block whose border reflects focus
pub fn focus_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let block = section_block(title, theme);
    if focused {
        block.border_style(theme.border_focused())
    } else {
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_fixed(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_fixed(40, 40, area), Rect::new(0, 0, 20, 10));
    }
}
