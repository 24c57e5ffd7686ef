//! Application shell and event handling

pub mod config;
pub mod events;
mod input;
pub mod state;
pub mod timer;

pub use config::StorefrontConfig;
pub use events::{Event, EventHandler, EventSender};
pub use state::{Page, SplashPage};

use crossterm::event::KeyEvent;
use ratatui::prelude::*;
use storefront_core::{
    AuthScreen, CatalogScreen, DetailScreen, MockCart, Navigation, ProfileScreen, Route,
    RouteKind, Router,
};

use crate::ui::components::notification::{Notification, NotificationManager};
use crate::ui::{self, Theme};

/// Main application struct
pub struct App {
    /// Navigation history of live pages
    pub router: Router<Page>,

    /// Cart collaborator lent to the detail screen
    pub cart: MockCart,

    /// Toasts for informational acknowledgments
    pub notifications: NotificationManager,

    /// Color palette
    pub theme: Theme,

    /// Loaded configuration
    pub config: StorefrontConfig,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter for animations
    pub tick: u64,

    /// Where timers deliver their events
    events: EventSender,
}

impl App {
    /// Create a new application instance, starting on the splash screen
    ///
    /// Must be called inside a tokio runtime: mounting the splash screen
    /// schedules its timer.
    pub fn new(config: StorefrontConfig, events: EventSender) -> Self {
        let theme = if config.high_contrast {
            Theme::high_contrast()
        } else {
            Theme::default()
        };
        let mut app = Self {
            router: Router::new(),
            cart: MockCart::new(),
            notifications: NotificationManager::new(),
            theme,
            config,
            should_quit: false,
            tick: 0,
            events,
        };
        app.navigate(Navigation::Reset(Route::Splash));
        app
    }

    /// Run the application main loop
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut EventHandler,
    ) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            match events.recv().await {
                Some(Event::InputClosed(reason)) => {
                    self.should_quit = true;
                    anyhow::bail!("terminal input closed: {}", reason);
                }
                Some(event) => self.handle_event(event),
                None => break,
            }
        }

        Ok(())
    }

    /// Current page
    pub fn page(&self) -> Option<&Page> {
        self.router.current()
    }

    /// Kind of the current page
    pub fn current_kind(&self) -> Option<RouteKind> {
        self.router.current_kind()
    }

    /// Dispatch an application event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => self.on_tick(),
            Event::Resize => {}
            Event::SplashElapsed(id) => match self.router.current() {
                Some(Page::Splash(splash)) if splash.timer_id() == id => {
                    self.navigate(Navigation::Replace(Route::Auth));
                }
                _ => tracing::debug!(timer = ?id, "ignoring stale splash timer"),
            },
            Event::InputClosed(reason) => {
                tracing::warn!(%reason, "no more terminal input, quitting");
                self.should_quit = true;
            }
        }
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if input::is_force_quit(&key) {
            self.should_quit = true;
            return;
        }

        let can_go_back = self.router.can_go_back();
        let navigation = match self.router.current_mut() {
            Some(Page::Splash(_)) | None => None,
            Some(Page::Auth(screen)) => input::auth(screen, can_go_back, key),
            Some(Page::Catalog(screen)) => input::catalog(screen, key),
            Some(Page::Detail(screen)) => input::detail(screen, &mut self.cart, key),
            Some(Page::Profile(screen)) => input::profile(screen, &mut self.notifications, key),
        };

        if let Some(navigation) = navigation {
            self.navigate(navigation);
        }
    }

    /// Apply a navigation command
    pub fn navigate(&mut self, navigation: Navigation) {
        let from = self.router.current_kind();
        match navigation {
            Navigation::Push(route) => {
                let page = self.build_page(route);
                self.router.push(page.kind(), page);
            }
            Navigation::Replace(route) => {
                let page = self.build_page(route);
                // The replaced page is dropped here, cancelling anything it owns
                drop(self.router.replace(page.kind(), page));
            }
            Navigation::Back => {
                if !self.router.back() {
                    tracing::debug!("nothing to go back to");
                }
            }
            Navigation::Reset(route) => {
                let page = self.build_page(route);
                self.router.reset(page.kind(), page);
            }
            Navigation::Quit => {
                self.should_quit = true;
            }
        }
        tracing::info!(
            from = ?from,
            to = ?self.router.current_kind(),
            depth = self.router.depth(),
            "navigated"
        );
    }

    /// Resolve a route into a fresh page
    fn build_page(&mut self, route: Route) -> Page {
        match route {
            Route::Splash => Page::Splash(SplashPage::mount(
                self.config.splash_delay(),
                self.events.clone(),
            )),
            Route::Auth => Page::Auth(AuthScreen::new()),
            Route::Catalog => Page::Catalog(CatalogScreen::default()),
            Route::Detail { product } => {
                if product.is_none() {
                    self.notifications
                        .push(Notification::warning("Product unavailable, showing a sample"));
                }
                Page::Detail(DetailScreen::new(product.map(|p| *p)))
            }
            Route::Profile => Page::Profile(ProfileScreen::new()),
        }
    }

    fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.notifications.tick();
    }
}
