//! Catalog screen: greeting, search, category chips, product grid

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use storefront_core::{CatalogFocus, CatalogScreen, Category, GRID_COLUMNS};

use crate::app::App;
use crate::ui::components::{nav_bar, product_card::ProductCard};
use crate::ui::layout::{focus_block, render_footer, render_header};
use crate::ui::Theme;

/// Height of one product card including its border
const CARD_HEIGHT: u16 = 6;

/// Draw the catalog screen
pub fn draw(frame: &mut Frame, area: Rect, screen: &CatalogScreen, app: &App) {
    let theme = &app.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(2), // Greeting
            Constraint::Length(3), // Search
            Constraint::Length(3), // Categories
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(2), // Nav bar
            Constraint::Length(2), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], &crate::ui::breadcrumb(app), None, theme);
    render_greeting(frame, chunks[1], theme);
    render_search(frame, chunks[2], screen, theme);
    render_categories(frame, chunks[3], screen, theme);
    render_grid(frame, chunks[4], screen, theme);

    let nav_cursor = (screen.focus() == CatalogFocus::NavBar).then(|| screen.nav_cursor());
    nav_bar::render(
        frame,
        chunks[5],
        screen.active_tab(),
        nav_cursor,
        app.cart.item_count(),
        theme,
    );

    let hints: &[(&str, &str)] = match screen.focus() {
        CatalogFocus::Search => &[("type", "Search"), ("Esc", "Clear"), ("Enter", "Results")],
        CatalogFocus::Categories => &[("←/→", "Category"), ("Tab", "Next"), ("q", "Quit")],
        CatalogFocus::Grid => &[
            ("←↑↓→", "Move"),
            ("Enter", "Open"),
            ("/", "Search"),
            ("p", "Profile"),
            ("q", "Quit"),
        ],
        CatalogFocus::NavBar => &[("←/→", "Tab"), ("Enter", "Go"), ("q", "Quit")],
    };
    render_footer(frame, chunks[6], hints, theme);
}

fn render_greeting(frame: &mut Frame, area: Rect, theme: &Theme) {
    let lines = vec![
        Line::styled(" Hello, User!", theme.title()),
        Line::styled(" What are you looking for today?", theme.text_secondary()),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_search(frame: &mut Frame, area: Rect, screen: &CatalogScreen, theme: &Theme) {
    let focused = screen.focus() == CatalogFocus::Search;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            theme.border_focused()
        } else {
            theme.border()
        });

    let text = screen.search_text();
    let line = if text.is_empty() && !focused {
        Line::styled(" ⌕ Search products...", theme.text_muted())
    } else {
        let cursor = if focused { "▏" } else { "" };
        Line::from(vec![
            Span::styled(" ⌕ ", theme.text_muted()),
            Span::styled(format!("{}{}", text, cursor), theme.input(focused)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_categories(frame: &mut Frame, area: Rect, screen: &CatalogScreen, theme: &Theme) {
    let focused = screen.focus() == CatalogFocus::Categories;
    let block = focus_block("Categories", focused, theme);

    let spans: Vec<Span> = Category::ALL
        .iter()
        .flat_map(|category| {
            let selected = *category == screen.category();
            [
                Span::styled(format!(" {} ", category.label()), theme.chip(selected)),
                Span::raw(" "),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_grid(frame: &mut Frame, area: Rect, screen: &CatalogScreen, theme: &Theme) {
    let focused = screen.focus() == CatalogFocus::Grid;
    let title = format!("Products ({})", screen.displayed_len());
    let block = focus_block(&title, focused, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let products = screen.displayed();
    if products.is_empty() {
        let empty = Paragraph::new(vec![
            Line::default(),
            Line::styled("No products found", theme.text_secondary()),
            Line::styled("Try another search or category", theme.text_muted()),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let visible_rows = (inner.height / CARD_HEIGHT).max(1) as usize;
    let cursor_row = screen.cursor() / GRID_COLUMNS;
    let first_row = (cursor_row + 1).saturating_sub(visible_rows);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
        .split(inner);

    for (index, product) in products.iter().enumerate() {
        let row = index / GRID_COLUMNS;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let column = columns[index % GRID_COLUMNS];
        let y = inner.y + ((row - first_row) as u16) * CARD_HEIGHT;
        let height = CARD_HEIGHT.min(inner.bottom().saturating_sub(y));
        if height == 0 {
            continue;
        }
        let card_area = Rect::new(column.x, y, column.width, height);
        ProductCard::new(product, focused && index == screen.cursor())
            .render(frame, card_area, theme);
    }
}
