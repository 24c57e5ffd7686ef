//! Screen modules for different views

pub mod auth;
pub mod catalog;
pub mod detail;
pub mod profile;
pub mod splash;
