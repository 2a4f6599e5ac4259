//! Error type for the few fallible entry points of the crate.
//!
//! The list-view controller itself never fails. Errors only come from parsing
//! user- or host-supplied settings: page sizes and view configuration.

use thiserror::Error;

/// Errors produced while parsing page sizes or view configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// A page size outside the allowed choices (5, 10, 20, 30, 50).
    #[error("invalid page size: {0} (expected one of 5, 10, 20, 30, 50)")]
    InvalidPageSize(String),

    /// The view configuration could not be decoded.
    #[error("invalid list view config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Convenience alias used by fallible functions in this crate.
pub type Result<T> = std::result::Result<T, Error>;
