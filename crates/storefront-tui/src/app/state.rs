//! Live pages held by the router

use std::time::Duration;

use storefront_core::{
    AnimationFrame, AuthScreen, CatalogScreen, DetailScreen, ProfileScreen, RouteKind,
    SplashAnimation,
};
use tokio::time::Instant;

use super::events::EventSender;
use super::timer::{ScheduledTransition, TimerId};

/// Splash screen instance
///
/// Owns its transition timer; dropping the page cancels the timer.
#[derive(Debug)]
pub struct SplashPage {
    animation: SplashAnimation,
    mounted_at: Instant,
    timer: ScheduledTransition,
}

impl SplashPage {
    /// Mount the splash screen and start its timer
    pub fn mount(delay: Duration, events: EventSender) -> Self {
        Self {
            animation: SplashAnimation::default(),
            mounted_at: Instant::now(),
            timer: ScheduledTransition::schedule(delay, events),
        }
    }

    pub fn timer_id(&self) -> TimerId {
        self.timer.id()
    }

    pub fn remaining(&self) -> Duration {
        self.timer.remaining()
    }

    /// Current animation frame
    pub fn frame(&self) -> AnimationFrame {
        self.animation.frame(self.mounted_at.elapsed())
    }
}

/// A screen instance living in the router history
#[derive(Debug)]
pub enum Page {
    Splash(SplashPage),
    Auth(AuthScreen),
    Catalog(CatalogScreen),
    Detail(DetailScreen),
    Profile(ProfileScreen),
}

impl Page {
    pub fn kind(&self) -> RouteKind {
        match self {
            Page::Splash(_) => RouteKind::Splash,
            Page::Auth(_) => RouteKind::Auth,
            Page::Catalog(_) => RouteKind::Catalog,
            Page::Detail(_) => RouteKind::Detail,
            Page::Profile(_) => RouteKind::Profile,
        }
    }
}
