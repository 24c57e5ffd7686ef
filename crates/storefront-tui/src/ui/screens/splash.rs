//! Splash screen with animated logo

use ratatui::prelude::*;
use ratatui::widgets::{Block, LineGauge, Paragraph};

use crate::app::{App, SplashPage};
use crate::ui::components::logo;

const TITLE: &str = "E-Commerce";
const SUBTITLE: &str = "Your Shopping Destination";
const LOADING: &str = "Loading...";

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash: &SplashPage, app: &App) {
    let theme = &app.theme;
    let animation = splash.frame();

    frame.render_widget(Block::default().style(Style::default().bg(theme.brand_deep)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Logo
            Constraint::Length(1), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Min(2),    // Spacer
            Constraint::Length(1), // Loading
            Constraint::Length(2), // Progress
        ])
        .split(area);

    logo::render(frame, chunks[0], animation, theme);

    let fade = theme.faded(animation.opacity).bg(theme.brand_deep);
    frame.render_widget(
        Paragraph::new(TITLE)
            .style(fade.add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(SUBTITLE).style(fade).alignment(Alignment::Center),
        chunks[2],
    );

    frame.render_widget(
        Paragraph::new(LOADING)
            .style(Style::default().fg(Color::White).bg(theme.brand_deep))
            .alignment(Alignment::Center),
        chunks[4],
    );

    let delay = app.config.splash_delay().as_secs_f64();
    let ratio = if delay > 0.0 {
        1.0 - splash.remaining().as_secs_f64() / delay
    } else {
        1.0
    };
    let gauge_area = chunks[5].inner(Margin::new(chunks[5].width / 4, 0));
    frame.render_widget(
        LineGauge::default()
            .filled_style(Style::default().fg(Color::White).bg(theme.brand_deep))
            .unfilled_style(Style::default().fg(theme.brand).bg(theme.brand_deep))
            .label("")
            .ratio(ratio.clamp(0.0, 1.0)),
        gauge_area,
    );
}
