//! Storefront Core - Screen state and navigation for the Storefront shell
//!
//! This crate holds everything the storefront needs that does not touch a
//! terminal: the sample catalog, the filtering rules, per-screen controllers,
//! the cart collaborator seam, and the route/router types the shell uses to
//! move between screens.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod detail;
pub mod error;
pub mod nav;
pub mod profile;
pub mod rating;
pub mod splash;

pub use auth::{AuthChoice, AuthScreen};
pub use cart::{Cart, CartLine, CartReceipt, MockCart};
pub use catalog::{
    filter_products, sample_products, CatalogFilter, CatalogFocus, CatalogScreen, Category,
    GridMove, NavTab, Product,
};
pub use detail::{
    fallback_product, sample_reviews, CartChoice, CartConfirmation, DetailScreen,
    DetailSelection, Review, Size,
};
pub use error::{Error, Result};
pub use nav::{Navigation, Route, RouteKind, Router};
pub use profile::{
    Acknowledgment, MenuItem, ProfileRow, ProfileScreen, ProfileSettings, Setting, UserProfile,
};
pub use rating::{filled_stars, star_cells, STAR_COUNT};
pub use splash::{AnimationFrame, SplashAnimation, SpringConfig};

/// Default delay before the splash screen hands over to the entry screen
pub const SPLASH_DELAY_MS: u64 = 3000;

/// Number of columns in the product grid
pub const GRID_COLUMNS: usize = 2;

/// Round a dollar amount to whole cents
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Format a dollar amount for display, e.g. `$99.99`
pub fn format_usd(amount: f64) -> String {
    format!("${:.2}", round_cents(amount))
}
