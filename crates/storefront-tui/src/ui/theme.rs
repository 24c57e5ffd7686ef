//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// Storefront color palette
pub struct Theme {
    // Primary branding colors
    pub brand: Color,
    pub brand_deep: Color,
    pub surface: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Product decoration
    pub star: Color,
    pub star_empty: Color,
    pub heart: Color,
    pub price: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Primary branding - Storefront indigo
            brand: Color::Rgb(102, 126, 234),     // #667EEA
            brand_deep: Color::Rgb(118, 75, 162), // #764BA2
            surface: Color::Rgb(28, 28, 36),      // #1C1C24

            // Status colors
            success: Color::Rgb(76, 175, 80), // #4CAF50 - Green
            warning: Color::Rgb(255, 152, 0), // #FF9800 - Orange
            danger: Color::Rgb(255, 71, 87),  // #FF4757 - Red
            info: Color::Rgb(33, 150, 243),   // #2196F3 - Blue

            // UI elements
            border: Color::Rgb(66, 66, 66),            // #424242
            border_focused: Color::Rgb(102, 126, 234), // #667EEA
            text_primary: Color::Rgb(250, 250, 250),   // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),     // #757575
            selection: Color::Rgb(48, 52, 78),         // #30344E

            // Product decoration
            star: Color::Rgb(255, 215, 0),        // #FFD700
            star_empty: Color::Rgb(221, 221, 221), // #DDDDDD
            heart: Color::Rgb(255, 71, 87),       // #FF4757
            price: Color::Rgb(102, 126, 234),     // #667EEA
        }
    }
}

impl Theme {
    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get highlighted text style
    pub fn text_highlight(&self) -> Style {
        Style::default().fg(self.brand).add_modifier(Modifier::BOLD)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn danger(&self) -> Style {
        Style::default().fg(self.danger).add_modifier(Modifier::BOLD)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Get selection/highlight style
    pub fn selection(&self) -> Style {
        Style::default().bg(self.selection).fg(self.text_primary)
    }

    /// Chip style for single-select rows (categories, sizes)
    pub fn chip(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .bg(self.brand)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_secondary)
        }
    }

    /// Get menu item style
    pub fn menu_item(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .bg(self.selection)
                .fg(self.brand)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_primary)
        }
    }

    pub fn price(&self) -> Style {
        Style::default().fg(self.price).add_modifier(Modifier::BOLD)
    }

    pub fn star(&self, filled: bool) -> Style {
        Style::default().fg(if filled { self.star } else { self.star_empty })
    }

    pub fn heart(&self, favorite: bool) -> Style {
        if favorite {
            Style::default().fg(self.heart).add_modifier(Modifier::BOLD)
        } else {
            self.text_secondary()
        }
    }

    /// Switch style for on/off settings
    pub fn switch(&self, on: bool) -> Style {
        if on {
            Style::default().fg(self.brand).add_modifier(Modifier::BOLD)
        } else {
            self.text_muted()
        }
    }

    /// Get input field style
    pub fn input(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.text_primary).bg(self.surface)
        } else {
            Style::default().fg(self.text_secondary).bg(self.surface)
        }
    }

    /// Blend the splash foreground towards the brand background
    pub fn faded(&self, opacity: f64) -> Style {
        Style::default().fg(blend(self.brand_deep, Color::Rgb(255, 255, 255), opacity))
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            selection: Color::DarkGray,
            ..Self::default()
        }
    }
}

/// Linear blend between two RGB colors; non-RGB colors snap at the midpoint
fn blend(from: Color, to: Color, amount: f64) -> Color {
    let t = amount.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let from = Color::Rgb(0, 0, 0);
        let to = Color::Rgb(200, 100, 50);
        assert_eq!(blend(from, to, 0.0), from);
        assert_eq!(blend(from, to, 1.0), to);
        assert_eq!(blend(from, to, 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(blend(from, to, 4.0), to);
    }

    #[test]
    fn test_named_colors_snap() {
        assert_eq!(blend(Color::Black, Color::White, 0.2), Color::Black);
        assert_eq!(blend(Color::Black, Color::White, 0.8), Color::White);
    }

    #[test]
    fn test_faded_runs_from_background_to_white() {
        let theme = Theme::default();
        assert_eq!(theme.faded(0.0).fg, Some(theme.brand_deep));
        assert_eq!(theme.faded(1.0).fg, Some(Color::Rgb(255, 255, 255)));
    }
}
