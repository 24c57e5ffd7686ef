//! Star rating row

use ratatui::prelude::*;
use storefront_core::star_cells;

use crate::ui::Theme;

const FILLED: &str = "★";
const EMPTY: &str = "☆";

/// Five star spans for a rating
pub fn star_spans(rating: f64, theme: &Theme) -> Vec<Span<'static>> {
    star_cells(rating)
        .iter()
        .map(|&filled| {
            let glyph = if filled { FILLED } else { EMPTY };
            Span::styled(glyph, theme.star(filled))
        })
        .collect()
}

/// Star row followed by the numeric rating and an optional review count
pub fn rating_line(rating: f64, reviews: Option<usize>, theme: &Theme) -> Line<'static> {
    let mut spans = star_spans(rating, theme);
    let caption = match reviews {
        Some(count) => format!(" {:.1} ({} reviews)", rating, count),
        None => format!(" {:.1}", rating),
    };
    spans.push(Span::styled(caption, theme.text_secondary()));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glyphs(rating: f64) -> String {
        star_spans(rating, &Theme::default())
            .iter()
            .map(|span| span.content.as_ref())
            .collect()
    }

    #[test]
    fn test_star_glyphs() {
        assert_eq!(glyphs(4.5), "★★★★☆");
        assert_eq!(glyphs(0.0), "☆☆☆☆☆");
        assert_eq!(glyphs(7.0), "★★★★★");
    }

    #[test]
    fn test_rating_caption() {
        let line = rating_line(4.5, Some(128), &Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "★★★★☆ 4.5 (128 reviews)");
    }
}
