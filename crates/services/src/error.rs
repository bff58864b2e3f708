//! Shared error types for the services crate.

use thiserror::Error;

use feed_core::model::PostError;

/// Errors emitted by feed post sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedError {
    #[error("feed api base url is not configured")]
    MissingBaseUrl,
    #[error("feed request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Post(#[from] PostError),
}
