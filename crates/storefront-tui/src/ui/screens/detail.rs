//! Product detail screen

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};
use storefront_core::detail::DESCRIPTION;
use storefront_core::{format_usd, CartChoice, DetailScreen, Review, Size};

use crate::app::App;
use crate::ui::components::dialog::{Dialog, DialogButton};
use crate::ui::components::product_card::image_glyph;
use crate::ui::components::stars::{rating_line, star_spans};
use crate::ui::layout::{render_footer, render_header, section_block, ScreenLayout};
use crate::ui::Theme;

/// Draw the detail screen
pub fn draw(frame: &mut Frame, area: Rect, screen: &DetailScreen, app: &App) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    let favorite = screen.selection().is_favorite();
    let heart = Line::styled(
        if favorite { "♥ Favorite " } else { "♡ Favorite " },
        theme.heart(favorite),
    );
    render_header(frame, layout.header, &crate::ui::breadcrumb(app), Some(heart), theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout.content);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary
            Constraint::Length(3), // Sizes
            Constraint::Length(3), // Quantity
            Constraint::Min(3),    // Total
        ])
        .split(columns[0]);

    render_summary(frame, left[0], screen, theme);
    render_sizes(frame, left[1], screen.selection().size(), theme);
    render_quantity(frame, left[2], screen.quantity(), theme);
    render_total(frame, left[3], screen.total(), theme);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(columns[1]);

    let description = Paragraph::new(DESCRIPTION)
        .style(theme.text_secondary())
        .wrap(Wrap { trim: true })
        .block(section_block("Description", theme));
    frame.render_widget(description, right[0]);
    render_reviews(frame, right[1], screen.reviews(), theme);

    let hints = &[
        ("+/-", "Qty"),
        ("←/→", "Size"),
        ("f", "Favorite"),
        ("Enter", "Add to Cart"),
        ("Esc", "Back"),
    ];
    render_footer(frame, layout.footer, hints, theme);

    if let Some(confirmation) = screen.confirmation() {
        Dialog {
            title: confirmation.title,
            message: &confirmation.message,
            secondary: DialogButton {
                key: "c",
                label: CartChoice::ContinueShopping.label(),
            },
            primary: DialogButton {
                key: "v",
                label: CartChoice::ViewCart.label(),
            },
            dangerous: false,
        }
        .render(frame, area, theme);
    }
}

fn render_summary(frame: &mut Frame, area: Rect, screen: &DetailScreen, theme: &Theme) {
    let product = screen.product();
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", image_glyph(&product.image_key)), theme.text_highlight()),
            Span::styled(product.name.clone(), theme.title()),
        ]),
        Line::styled(format_usd(product.price), theme.price()),
        rating_line(product.rating, Some(screen.reviews().len()), theme),
        Line::styled(format!("Category: {}", product.category), theme.text_muted()),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(section_block("Product", theme)),
        area,
    );
}

fn render_sizes(frame: &mut Frame, area: Rect, selected: Size, theme: &Theme) {
    let spans: Vec<Span> = Size::ALL
        .iter()
        .enumerate()
        .flat_map(|(i, size)| {
            [
                Span::styled(format!("{}", i + 1), theme.text_muted()),
                Span::styled(format!(" {} ", size.label()), theme.chip(*size == selected)),
                Span::raw(" "),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(section_block("Size", theme)),
        area,
    );
}

fn render_quantity(frame: &mut Frame, area: Rect, quantity: u32, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled(" [-] ", theme.text_highlight()),
        Span::styled(format!(" {} ", quantity), theme.title()),
        Span::styled(" [+] ", theme.text_highlight()),
    ]);
    frame.render_widget(
        Paragraph::new(line).block(section_block("Quantity", theme)),
        area,
    );
}

fn render_total(frame: &mut Frame, area: Rect, total: f64, theme: &Theme) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Total: ", theme.text_secondary()),
            Span::styled(format_usd(total), theme.price()),
        ]),
        Line::styled("[Enter] Add to Cart", theme.chip(true)),
    ];
    frame.render_widget(Paragraph::new(lines), area.inner(Margin::new(1, 1)));
}

fn render_reviews(frame: &mut Frame, area: Rect, reviews: &[Review], theme: &Theme) {
    let mut lines = Vec::new();
    for review in reviews {
        let mut header = vec![Span::styled(format!("{} ", review.user), theme.text_highlight())];
        header.extend(star_spans(f64::from(review.rating), theme));
        header.push(Span::styled(format!("  {}", review.relative_date), theme.text_muted()));
        lines.push(Line::from(header));
        lines.push(Line::styled(review.comment.clone(), theme.text()));
        lines.push(Line::default());
    }

    let reviews = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(section_block("Reviews", theme));
    frame.render_widget(reviews, area);
}
