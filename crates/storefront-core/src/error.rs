//! Error types for storefront-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown size: {0}")]
    UnknownSize(String),
}
