//! Error types for page lookup and output encoding.

use thiserror::Error;

/// Result alias for site operations.
pub type SiteResult<T> = Result<T, SiteError>;

/// Errors raised while locating or encoding pages.
#[derive(Debug, Error)]
pub enum SiteError {
    /// No page is registered under the requested slug.
    #[error("unknown page")]
    UnknownPage {
        /// Slug supplied by the caller.
        slug: String,
    },
    /// Encoding a rendered page as JSON failed.
    #[error("failed to encode rendered page")]
    Encode {
        /// Source serde error.
        source: serde_json::Error,
    },
}
