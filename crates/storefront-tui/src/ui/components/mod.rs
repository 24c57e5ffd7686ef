//! Reusable UI components

pub mod dialog;
pub mod logo;
pub mod nav_bar;
pub mod notification;
pub mod product_card;
pub mod stars;
