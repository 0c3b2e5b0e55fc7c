//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]`, so configuration problems surface unchanged from
//! whichever layer validated them.

use thiserror::Error;

/// The error type for `sd-core` and a common base for sub-crates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sd-core`.
pub type CoreResult<T> = Result<T, CoreError>;
