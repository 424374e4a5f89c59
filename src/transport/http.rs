//! reqwest-backed [`Transport`].

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use reqwest::{Client, RequestBuilder};
use tracing::{debug, instrument};
use url::Url;
use url::form_urlencoded;

use super::http_client::{HttpTimeouts, RedirectMode, build_http_client};
use super::{Fields, Transport};
use crate::auth::Session;
use crate::endpoints::Endpoints;
use crate::error::FanError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Transport that talks to the main host over HTTP.
///
/// Create once and reuse; the underlying client pools connections.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoints: Endpoints,
}

impl HttpTransport {
    /// Creates a transport for the given endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::Client`] if HTTP client construction fails.
    pub fn new(endpoints: Endpoints, timeouts: HttpTimeouts) -> Result<Self, FanError> {
        let client = build_http_client("session transport", timeouts, RedirectMode::Follow)?;
        Ok(Self { client, endpoints })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, session, query), fields(path = %path))]
    async fn get(
        &self,
        session: &Session,
        path: &str,
        query: Fields<'_>,
    ) -> Result<String, FanError> {
        let mut url = self.endpoints.www_url(path)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(name, value)| (*name, value.as_str())));
        }
        debug!(url = %url, "GET");
        let request = with_session_cookies(self.client.get(url.clone()), session);
        send_for_text(request, &url).await
    }

    #[instrument(skip(self, session, form), fields(path = %path))]
    async fn post(
        &self,
        session: &Session,
        path: &str,
        form: Fields<'_>,
    ) -> Result<String, FanError> {
        let url = self.endpoints.www_url(path)?;
        let mut fields: Vec<(&str, &str)> = form
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        fields.push(("__user", session.user_id()));
        fields.push(("fb_dtsg", session.secret_token().expose()));
        fields.push(("__a", "1"));

        debug!(url = %url, fields = form.len(), "POST");
        let request = with_session_cookies(self.client.post(url.clone()), session)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(encode_form(&fields));
        send_for_text(request, &url).await
    }
}

/// Encodes name/value pairs as an `application/x-www-form-urlencoded` body.
#[must_use]
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields.iter())
        .finish()
}

pub(crate) fn with_session_cookies(request: RequestBuilder, session: &Session) -> RequestBuilder {
    match session.cookie_header() {
        Some(header) => request.header(COOKIE, header),
        None => request,
    }
}

pub(crate) async fn send_for_text(request: RequestBuilder, url: &Url) -> Result<String, FanError> {
    let response = request
        .send()
        .await
        .map_err(|error| FanError::transport(url.as_str(), describe_reqwest_error(&error)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FanError::transport(
            url.as_str(),
            format!("HTTP {}", status.as_u16()),
        ));
    }

    response
        .text()
        .await
        .map_err(|error| FanError::transport(url.as_str(), describe_reqwest_error(&error)))
}

pub(crate) fn describe_reqwest_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {error}")
    } else {
        error.to_string()
    }
}
