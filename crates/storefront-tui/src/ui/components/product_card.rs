//! Product card used by the catalog grid

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use storefront_core::{format_usd, Product};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::stars::star_spans;
use crate::ui::Theme;

/// Terminal glyph standing in for a product image key
pub fn image_glyph(image_key: &str) -> &'static str {
    match image_key {
        "headphones" | "headset" => "♫",
        "watch" => "◷",
        "football" => "⚽",
        "cafe" => "☕",
        "briefcase" => "▤",
        "musical-notes" => "♪",
        _ => "▣",
    }
}

/// Truncate to a display width, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Card showing a product's image glyph, name, price and stars
pub struct ProductCard<'a> {
    pub product: &'a Product,
    pub selected: bool,
}

impl<'a> ProductCard<'a> {
    pub fn new(product: &'a Product, selected: bool) -> Self {
        Self { product, selected }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(if self.selected {
                theme.border_focused()
            } else {
                theme.border()
            });

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let name_width = inner.width.saturating_sub(1) as usize;
        let name_style = if self.selected {
            theme.text_highlight()
        } else {
            theme.text()
        };

        let lines = vec![
            Line::styled(image_glyph(&self.product.image_key), theme.text_highlight())
                .alignment(Alignment::Center),
            Line::styled(truncate_to_width(&self.product.name, name_width), name_style),
            Line::styled(format_usd(self.product.price), theme.price()),
            Line::from(star_spans(self.product.rating, theme)),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("Smart Watch", 20), "Smart Watch");
        assert_eq!(truncate_to_width("Wireless Headphones", 8), "Wireles…");
        assert_eq!(truncate_to_width("Coffee", 0), "");
    }

    #[test]
    fn test_unknown_image_key_has_glyph() {
        assert_eq!(image_glyph("watch"), "◷");
        assert_eq!(image_glyph("nope"), "▣");
    }
}
