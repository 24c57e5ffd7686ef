//! Profile screen: identity card, menu, switches, logout

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use storefront_core::profile::MENU;
use storefront_core::{ProfileRow, ProfileScreen};

use crate::app::App;
use crate::ui::components::dialog::{Dialog, DialogButton};
use crate::ui::layout::{render_footer, render_header, section_block, ScreenLayout};
use crate::ui::Theme;

fn menu_glyph(icon_key: &str) -> &'static str {
    match icon_key {
        "person" => "☺",
        "receipt" => "▤",
        "heart" => "♡",
        "location" => "⌖",
        "card" => "▭",
        "help-circle" => "?",
        "information-circle" => "ℹ",
        _ => "•",
    }
}

/// Draw the profile screen
pub fn draw(frame: &mut Frame, area: Rect, screen: &ProfileScreen, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    let edit = Line::styled("[e] Edit ", theme.text_highlight());
    render_header(frame, layout.header, &crate::ui::breadcrumb(app), Some(edit), theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4), Constraint::Length(1)])
        .split(layout.content);

    render_identity(frame, chunks[0], screen, theme);
    render_rows(frame, chunks[1], screen, theme);

    let version = Paragraph::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
        .style(theme.text_muted())
        .alignment(Alignment::Center);
    frame.render_widget(version, chunks[2]);

    let hints = &[
        ("↑/↓", "Navigate"),
        ("Enter", "Select"),
        ("e", "Edit"),
        ("L", "Logout"),
        ("Esc", "Back"),
    ];
    render_footer(frame, layout.footer, hints, theme);

    if screen.logout_pending() {
        Dialog {
            title: "Logout",
            message: "Are you sure you want to logout?",
            secondary: DialogButton {
                key: "n",
                label: "Cancel",
            },
            primary: DialogButton {
                key: "y",
                label: "Logout",
            },
            dangerous: true,
        }
        .render(frame, area, theme);
    }
}

fn render_identity(frame: &mut Frame, area: Rect, screen: &ProfileScreen, theme: &Theme) {
    let user = screen.user();
    let lines = vec![
        Line::styled(format!("☺ {}", user.name), theme.title()),
        Line::styled(user.email, theme.text_secondary()),
        Line::styled(user.phone, theme.text_secondary()),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(section_block("Account", theme)),
        area,
    );
}

fn render_rows(frame: &mut Frame, area: Rect, screen: &ProfileScreen, theme: &Theme) {
    let settings = screen.settings();
    let items: Vec<ListItem> = screen
        .rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let selected = i == screen.cursor();
            let line = match row {
                ProfileRow::Menu(index) => {
                    let (glyph, label) = MENU
                        .get(*index)
                        .map(|item| (menu_glyph(item.icon_key), item.label))
                        .unwrap_or(("•", ""));
                    Line::from(vec![
                        Span::styled(format!("{} ", glyph), theme.text_highlight()),
                        Span::styled(label, theme.menu_item(selected)),
                        Span::styled("  ›", theme.text_muted()),
                    ])
                }
                ProfileRow::Setting(setting) => {
                    let on = settings.get(*setting);
                    Line::from(vec![
                        Span::styled(format!("{:<24}", setting.label()), theme.menu_item(selected)),
                        Span::styled(if on { "[ ON ]" } else { "[OFF ]" }, theme.switch(on)),
                    ])
                }
                ProfileRow::Logout => Line::from(vec![
                    Span::styled("⏻ ", theme.danger()),
                    Span::styled("Logout", if selected { theme.selection() } else { theme.danger() }),
                ]),
            };
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(section_block("Menu & Settings", theme))
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(screen.cursor()));
    frame.render_stateful_widget(list, area, &mut state);
}
