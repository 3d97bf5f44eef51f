//! Errors raised at the crate's boundaries.
//!
//! The controller itself never fails: bad input is clamped or ignored. Only
//! data arriving from the host (page URL, JS objects) can be rejected.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The page URL the query is attached to could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A JS value did not have the expected shape.
    #[error("invalid {what}: {message}")]
    InvalidState { what: &'static str, message: String },
}
