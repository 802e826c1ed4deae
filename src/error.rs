// src/error.rs
//
// Everything here is fatal: the tool makes one pass over the portal and
// any failure propagates straight out of main. No retries, no fallbacks.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Operator input rejected before any network activity.
    #[error("{0}")]
    Validation(String),

    /// The HTTP layer reported a non-success status or a network failure.
    #[error("{method} request to `{uri}` failed")]
    Transport {
        method: &'static str,
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// A required selectable option was absent from a fetched page.
    #[error("`{name}` not found on the {page} page")]
    NotFound { name: String, page: &'static str },

    /// An element the page contract guarantees is missing or unreadable.
    #[error("malformed page: {0}")]
    MalformedPage(&'static str),
}

impl ScrapeError {
    pub fn transport(method: &'static str, uri: &str, source: reqwest::Error) -> Self {
        Self::Transport {
            method,
            uri: uri.to_string(),
            source,
        }
    }
}
