//! Entry screen

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use storefront_core::{AuthChoice, AuthScreen};

use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, render_footer, render_header, ScreenLayout};

/// Draw the entry screen
pub fn draw(frame: &mut Frame, area: Rect, screen: &AuthScreen, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    render_header(frame, layout.header, &crate::ui::breadcrumb(app), None, theme);

    let card = centered_rect_fixed(44, 11, layout.content);
    let block = Block::default()
        .title(" Welcome ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_focused());
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut lines = vec![
        Line::styled("Welcome to E-Commerce", theme.text_highlight()).alignment(Alignment::Center),
        Line::styled("Browse, pick and shop.", theme.text_secondary())
            .alignment(Alignment::Center),
        Line::default(),
    ];
    for choice in [AuthChoice::Continue, AuthChoice::Quit] {
        let selected = screen.selected() == choice;
        let marker = if selected { "▶ " } else { "  " };
        lines.push(
            Line::styled(format!("{}{}", marker, choice.label()), theme.menu_item(selected))
                .alignment(Alignment::Center),
        );
    }
    frame.render_widget(Paragraph::new(lines), inner);

    let hints = &[("↑/↓", "Choose"), ("Enter", "Select"), ("q", "Quit")];
    render_footer(frame, layout.footer, hints, theme);
}
