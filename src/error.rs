//! Error types for session, page and fan operations.
//!
//! Every variant follows the What/Suggestion message pattern used across the
//! project so the binary can print errors verbatim.

use thiserror::Error;

use crate::fans::FanKind;

/// Errors that can occur while logging in, resolving a page or fetching fans.
#[derive(Debug, Error)]
pub enum FanError {
    /// Login failed: bad credentials or an unparsable login response.
    #[error(
        "login failed for '{email}': {source}\n  Suggestion: Check the email and password, then log in once through a browser to clear any security checkpoint"
    )]
    Auth {
        /// Email address used for the login attempt.
        email: String,
        /// First failure encountered during the login flow.
        #[source]
        source: Box<FanError>,
    },

    /// The page id marker was not found in the page markup.
    #[error(
        "page '{page}' not found: no page id marker in its markup\n  Suggestion: Check the page name; the page may be private or unpublished"
    )]
    NotFound {
        /// Page name as given by the caller.
        page: String,
    },

    /// Network or HTTP failure.
    #[error("request to {url} failed: {reason}")]
    Transport {
        /// Target URL.
        url: String,
        /// Why the request failed.
        reason: String,
    },

    /// An expected structural marker is absent from a response.
    #[error("cannot parse response from {context}: {reason}")]
    Parse {
        /// Which response was being parsed.
        context: String,
        /// What was missing or malformed.
        reason: String,
    },

    /// Caller supplied an unusable value.
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending input.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// Pagination ran past the configured maximum offset.
    #[error(
        "{kind} listing still returned data beyond offset {max_offset}\n  Suggestion: Raise max_offset in the config file if the page really has this many fans"
    )]
    PaginationLimit {
        /// Which listing overran.
        kind: FanKind,
        /// Configured maximum offset.
        max_offset: usize,
    },

    /// HTTP client construction failed.
    #[error("HTTP client construction failed: {0}")]
    Client(String),
}

impl FanError {
    /// Creates an `Auth` error wrapping the first failure of the login flow.
    #[must_use]
    pub fn auth(email: &str, source: FanError) -> Self {
        Self::Auth {
            email: email.to_string(),
            source: Box::new(source),
        }
    }

    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(page: &str) -> Self {
        Self::NotFound {
            page: page.to_string(),
        }
    }

    /// Creates a `Transport` error.
    #[must_use]
    pub fn transport(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `Parse` error.
    #[must_use]
    pub fn parse(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Creates an `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
