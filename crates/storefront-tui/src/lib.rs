//! Storefront TUI - Terminal storefront shell
//!
//! Renders the storefront screens with ratatui and drives them from a tokio
//! event loop. Screen state and navigation rules live in `storefront-core`;
//! this crate owns the live pages, the splash timer, key bindings and
//! drawing.

pub mod app;
pub mod ui;

pub use app::App;
