//! Error types for link card resolution.
//!
//! Resolution errors never leave the link card renderer. The problem lookup
//! stage turns them into a fallback to page scraping, and the scraping stage
//! turns them into an inline error fragment whose text is the `Display`
//! output of [`LinkCardError`].

use thiserror::Error;

/// Failure while resolving metadata for a link card.
#[derive(Debug, Error)]
pub enum LinkCardError {
    /// Transport failure, timeout, or non-success HTTP status.
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Input could not be parsed as an absolute URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// URL parsed but carries no host to show as the card domain.
    #[error("URL has no host: {0}")]
    MissingHost(String),

    /// Lookup API returned a body that is not the expected JSON.
    #[error("malformed lookup response: {0}")]
    Json(#[from] serde_json::Error),

    /// Lookup API answered with an empty result list.
    #[error("no problem found for id {0}")]
    EmptyLookup(String),

    /// URL does not point at a judge problem page.
    #[error("not a problem URL: {0}")]
    NotAProblemUrl(String),
}

/// Result alias for link card resolution.
pub type Result<T> = std::result::Result<T, LinkCardError>;
