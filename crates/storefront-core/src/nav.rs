//! Routes and navigation history
//!
//! Screens never name each other by string. A controller that wants to move
//! somewhere emits a [`Navigation`] carrying a typed [`Route`]; the shell turns
//! the route into a live page and records it in a [`Router`].

use crate::catalog::Product;

/// Default maximum history depth
const DEFAULT_MAX_DEPTH: usize = 20;

/// Kind of screen, without its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKind {
    Splash,
    Auth,
    Catalog,
    Detail,
    Profile,
}

impl RouteKind {
    /// Title used in the header breadcrumb
    pub fn title(&self) -> &'static str {
        match self {
            RouteKind::Splash => "Splash",
            RouteKind::Auth => "Welcome",
            RouteKind::Catalog => "Home",
            RouteKind::Detail => "Product Details",
            RouteKind::Profile => "Profile",
        }
    }
}

/// A destination together with the parameters the destination needs
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Timed announcement screen
    Splash,
    /// Entry screen reached from the splash timer and from logout
    Auth,
    /// Product browse grid
    Catalog,
    /// Single product view; `None` falls back to the mock product
    Detail { product: Option<Box<Product>> },
    /// User profile and settings
    Profile,
}

impl Route {
    /// Detail route for a product
    pub fn detail(product: Product) -> Self {
        Route::Detail {
            product: Some(Box::new(product)),
        }
    }

    /// Kind of this route
    pub fn kind(&self) -> RouteKind {
        match self {
            Route::Splash => RouteKind::Splash,
            Route::Auth => RouteKind::Auth,
            Route::Catalog => RouteKind::Catalog,
            Route::Detail { .. } => RouteKind::Detail,
            Route::Profile => RouteKind::Profile,
        }
    }
}

/// Transition requested by a screen
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Add a page on top of the history
    Push(Route),
    /// Swap the current page; the replaced page is not reachable via back
    Replace(Route),
    /// Pop the current page
    Back,
    /// Drop the whole history and start over at a route
    Reset(Route),
    /// Leave the application
    Quit,
}

struct Entry<P> {
    kind: RouteKind,
    page: P,
}

/// Navigation history of live pages
///
/// The last entry is the current page. Pages that leave the history are
/// dropped, so any state or resources they own go with them.
pub struct Router<P> {
    history: Vec<Entry<P>>,
    max_depth: usize,
}

impl<P> Router<P> {
    /// Create an empty router
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Create an empty router with a custom depth bound
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            history: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Push a page onto the history
    pub fn push(&mut self, kind: RouteKind, page: P) {
        if self.history.len() >= self.max_depth {
            let evicted = self.history.remove(0);
            tracing::debug!(kind = ?evicted.kind, "history full, evicting oldest page");
        }
        self.history.push(Entry { kind, page });
    }

    /// Replace the current page, returning the page that was replaced
    pub fn replace(&mut self, kind: RouteKind, page: P) -> Option<P> {
        let previous = self.history.pop().map(|entry| entry.page);
        self.history.push(Entry { kind, page });
        previous
    }

    /// Go back to the previous page
    ///
    /// Returns false and leaves the history untouched when there is nothing
    /// to go back to.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.history.pop();
        true
    }

    /// Clear the history and start again from a single page
    pub fn reset(&mut self, kind: RouteKind, page: P) {
        self.history.clear();
        self.history.push(Entry { kind, page });
    }

    /// Current page
    pub fn current(&self) -> Option<&P> {
        self.history.last().map(|entry| &entry.page)
    }

    /// Current page, mutably
    pub fn current_mut(&mut self) -> Option<&mut P> {
        self.history.last_mut().map(|entry| &mut entry.page)
    }

    /// Kind of the current page
    pub fn current_kind(&self) -> Option<RouteKind> {
        self.history.last().map(|entry| entry.kind)
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Number of pages in the history
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Whether any page of the given kind is still alive in the history
    pub fn contains(&self, kind: RouteKind) -> bool {
        self.history.iter().any(|entry| entry.kind == kind)
    }

    /// Get the breadcrumb trail
    pub fn breadcrumb(&self) -> Vec<&'static str> {
        self.history.iter().map(|entry| entry.kind.title()).collect()
    }
}

impl<P> Default for Router<P> {
    fn default() -> Self {
        Self::new()
    }
}
