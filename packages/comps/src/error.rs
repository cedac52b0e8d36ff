//! Typed errors for the comps library.
//!
//! Field-level failures stay inside the extractor and mapper; only
//! transport failures and bad input surface through [`CompsError`].

use thiserror::Error;

/// Errors that can occur during a comps lookup.
#[derive(Debug, Error)]
pub enum CompsError {
    /// Fetching the primary search page failed
    #[error("primary fetch failed: {0}")]
    PrimaryFetch(#[source] FetchError),

    /// The fallback search API was reached but returned a failure
    #[error("fallback fetch failed: {0}")]
    FallbackFetch(#[source] FetchError),

    /// Invalid query provided
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },
}

/// Transport-level failures reported by fetch collaborators.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Upstream answered with a non-success status
    #[error("upstream error {status}: {message}")]
    Api { status: u16, message: String },

    /// Upstream payload could not be decoded
    #[error("decode error: {0}")]
    Decode(String),
}

/// A single field that could not be normalized.
///
/// Never escapes the crate's public pipeline functions; it is logged and the
/// owning record is dropped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("field is empty")]
    Empty,

    #[error("not a price: {0:?}")]
    InvalidPrice(String),

    #[error("invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },

    #[error("unknown month token: {0:?}")]
    UnknownMonth(String),

    #[error("encoding artifact in {0:?}")]
    EncodingArtifact(String),
}

/// Result type alias for comps operations.
pub type Result<T> = std::result::Result<T, CompsError>;

/// Result type alias for fetch collaborators.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for field normalization.
pub type FieldResult<T> = std::result::Result<T, FieldError>;
