//! Animated storefront logo for the splash screen

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use storefront_core::AnimationFrame;

use crate::ui::Theme;

/// Shopping cart art, every line the same width
const CART_ART: [&str; 7] = [
    " ┌──┐               ",
    "  ╲ ╲_____________  ",
    "   ╲ │ ▓▓ ▓▓ ▓▓ ▓│  ",
    "    ╲│ ▓▓ ▓▓ ▓▓ ▓│  ",
    "     ╰───────────╯  ",
    "       ◯       ◯    ",
    "                    ",
];

/// Central slice of the art that is visible at a given scale
///
/// Scales above one (spring overshoot) show the whole art.
pub fn scaled_art(scale: f64) -> Vec<String> {
    let scale = if scale.is_finite() { scale.clamp(0.0, 1.0) } else { 1.0 };
    let full_height = CART_ART.len();
    let full_width = CART_ART[0].chars().count();

    let height = ((full_height as f64 * scale).round() as usize).clamp(1, full_height);
    let width = ((full_width as f64 * scale).round() as usize).clamp(1, full_width);
    let top = (full_height - height) / 2;
    let left = (full_width - width) / 2;

    CART_ART[top..top + height]
        .iter()
        .map(|line| line.chars().skip(left).take(width).collect())
        .collect()
}

/// Render the cart logo centered in `area` for one animation frame
pub fn render(frame: &mut Frame, area: Rect, animation: AnimationFrame, theme: &Theme) {
    let lines = scaled_art(animation.scale);
    let height = lines.len() as u16;
    let start_y = area.y + area.height.saturating_sub(height) / 2;
    let style = theme.faded(animation.opacity);

    for (i, line) in lines.into_iter().enumerate() {
        let y = start_y + i as u16;
        if y >= area.bottom() {
            break;
        }
        let width = (line.chars().count() as u16).min(area.width);
        let x = area.x + area.width.saturating_sub(width) / 2;
        frame.render_widget(
            Paragraph::new(line).style(style),
            Rect::new(x, y, width, 1),
        );
    }
}
