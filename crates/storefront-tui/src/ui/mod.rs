//! UI rendering

pub mod components;
pub mod layout;
pub mod screens;
pub mod theme;

pub use theme::Theme;

use ratatui::prelude::*;
use ratatui::widgets::Block;

use crate::app::{App, Page};

/// Main render function - delegates to the current page's screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().style(app.theme.text()), area);

    match app.page() {
        Some(Page::Splash(splash)) => screens::splash::draw(frame, area, splash, app),
        Some(Page::Auth(screen)) => screens::auth::draw(frame, area, screen, app),
        Some(Page::Catalog(screen)) => screens::catalog::draw(frame, area, screen, app),
        Some(Page::Detail(screen)) => screens::detail::draw(frame, area, screen, app),
        Some(Page::Profile(screen)) => screens::profile::draw(frame, area, screen, app),
        None => {}
    }

    app.notifications.render(frame, area, &app.theme);
}

/// Breadcrumb trail for the header
pub fn breadcrumb(app: &App) -> String {
    app.router.breadcrumb().join(" > ")
}
