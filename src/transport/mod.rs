//! Authenticated transport to the remote service.
//!
//! - [`Transport`] - Async trait every fetch goes through
//! - [`HttpTransport`] - reqwest implementation against the main host
//!
//! Each call receives the [`Session`] explicitly; the transport attaches its
//! cookies to every request and its user id and secret token to every POST.

mod http;
mod http_client;

pub use http::{HttpTransport, encode_form};
pub(crate) use http::{describe_reqwest_error, send_for_text};
pub use http_client::{
    BROWSER_USER_AGENT, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_READ_TIMEOUT_SECS, HttpTimeouts,
    RedirectMode, build_http_client,
};

use async_trait::async_trait;

use crate::auth::Session;
use crate::error::FanError;

/// Form/query fields as ordered name/value pairs.
pub type Fields<'a> = &'a [(&'a str, String)];

/// Authenticated GET/POST against the main host.
///
/// Implementations must be usable behind `&dyn Transport`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GETs `path` with `query` parameters and returns the body.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::Transport`] on network failure or non-success status.
    async fn get(
        &self,
        session: &Session,
        path: &str,
        query: Fields<'_>,
    ) -> Result<String, FanError>;

    /// POSTs `form` fields plus the session fields to `path` and returns the body.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::Transport`] on network failure or non-success status.
    async fn post(
        &self,
        session: &Session,
        path: &str,
        form: Fields<'_>,
    ) -> Result<String, FanError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn get(
        &self,
        session: &Session,
        path: &str,
        query: Fields<'_>,
    ) -> Result<String, FanError> {
        (**self).get(session, path, query).await
    }

    async fn post(
        &self,
        session: &Session,
        path: &str,
        form: Fields<'_>,
    ) -> Result<String, FanError> {
        (**self).post(session, path, form).await
    }
}
