//! Bottom navigation bar

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use storefront_core::NavTab;

use crate::ui::Theme;

fn tab_glyph(tab: NavTab) -> &'static str {
    match tab {
        NavTab::Home => "⌂",
        NavTab::Search => "⌕",
        NavTab::Cart => "◫",
        NavTab::Profile => "☺",
    }
}

/// Render the four tabs, marking the active tab and the cursor
pub fn render(
    frame: &mut Frame,
    area: Rect,
    active: NavTab,
    cursor: Option<NavTab>,
    cart_items: u64,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(if cursor.is_some() {
            theme.border_focused()
        } else {
            theme.border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    for (tab, column) in NavTab::ALL.iter().zip(columns.iter()) {
        let mut label = format!("{} {}", tab_glyph(*tab), tab.label());
        if *tab == NavTab::Cart && cart_items > 0 {
            label.push_str(&format!(" ({})", cart_items));
        }

        let style = if cursor == Some(*tab) {
            theme.selection()
        } else if *tab == active {
            theme.text_highlight()
        } else {
            theme.text_muted()
        };

        frame.render_widget(
            Paragraph::new(label).style(style).alignment(Alignment::Center),
            *column,
        );
    }
}
