//! Login flow against the mobile site.
//!
//! 1. POST the credentials to `login.php` without following redirects; the
//!    `c_user` cookie of that response is the user id.
//! 2. GET the user's own page with the harvested cookies; its hidden
//!    `fb_dtsg` input is the secret token needed for later POSTs.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, COOKIE};
use tracing::{debug, info, instrument};

use super::session::{Credentials, SecretToken, Session, SessionCookie, cookie_header};
use crate::endpoints::Endpoints;
use crate::error::FanError;
use crate::transport::{
    HttpTimeouts, RedirectMode, build_http_client, describe_reqwest_error, encode_form,
    send_for_text,
};

/// Cookie that carries the logged-in user id.
pub const USER_ID_COOKIE: &str = "c_user";

const LOGIN_PATH: &str = "login.php";

#[allow(clippy::expect_used)]
static SECRET_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"name="fb_dtsg" value="([^"]+)""#)
        .expect("fb_dtsg regex is valid") // Static pattern, safe to panic
});

/// Exchanges credentials for a [`Session`].
#[derive(Debug, Clone)]
pub struct Authenticator {
    client: Client,
    endpoints: Endpoints,
}

impl Authenticator {
    /// Creates an authenticator for the given endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::Client`] if HTTP client construction fails.
    pub fn new(endpoints: Endpoints, timeouts: HttpTimeouts) -> Result<Self, FanError> {
        let client = build_http_client("login", timeouts, RedirectMode::Stop)?;
        Ok(Self { client, endpoints })
    }

    /// Logs in and returns the session.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::Auth`] wrapping the first failure: a transport
    /// error, or a [`FanError::Parse`] when the user id cookie or the secret
    /// token marker is missing.
    #[instrument(skip(self, credentials), fields(email = %credentials.email))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, FanError> {
        self.login_inner(credentials)
            .await
            .map_err(|error| FanError::auth(&credentials.email, error))
    }

    async fn login_inner(&self, credentials: &Credentials) -> Result<Session, FanError> {
        let login_url = self.endpoints.mobile_url(LOGIN_PATH)?;
        let body = encode_form(&[
            ("email", credentials.email.as_str()),
            ("pass", credentials.password()),
        ]);

        let response = self
            .client
            .post(login_url.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|error| {
                FanError::transport(login_url.as_str(), describe_reqwest_error(&error))
            })?;
        debug!(status = response.status().as_u16(), "login response received");

        let cookies: Vec<SessionCookie> = response
            .cookies()
            .map(|cookie| SessionCookie::new(cookie.name(), cookie.value()))
            .collect();
        let user_id = find_user_id(&cookies).ok_or_else(|| {
            FanError::parse(
                "login response",
                format!(
                    "cookie '{USER_ID_COOKIE}' missing; the credentials were probably rejected"
                ),
            )
        })?;
        debug!(cookies = cookies.len(), "harvested login cookies");

        let secret_token = self.fetch_secret_token(&user_id, &cookies).await?;
        info!(user_id = %user_id, "logged in");

        Ok(Session::new(user_id, secret_token, cookies))
    }

    async fn fetch_secret_token(
        &self,
        user_id: &str,
        cookies: &[SessionCookie],
    ) -> Result<SecretToken, FanError> {
        let home_url = self.endpoints.mobile_url(&urlencoding::encode(user_id))?;
        let mut request = self.client.get(home_url.clone());
        if let Some(header) = cookie_header(cookies) {
            request = request.header(COOKIE, header);
        }
        let html = send_for_text(request, &home_url).await?;

        extract_secret_token(&html).ok_or_else(|| {
            FanError::parse(
                format!("user page {home_url}"),
                "hidden input 'fb_dtsg' missing",
            )
        })
    }
}

fn find_user_id(cookies: &[SessionCookie]) -> Option<String> {
    cookies
        .iter()
        .rev()
        .find(|cookie| cookie.name == USER_ID_COOKIE && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}

/// Extracts the `fb_dtsg` token from a hidden form input.
#[must_use]
pub fn extract_secret_token(html: &str) -> Option<SecretToken> {
    SECRET_TOKEN_PATTERN
        .captures(html)
        .and_then(|captures| captures.get(1))
        .map(|token| SecretToken::new(token.as_str()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_secret_token_from_hidden_input() {
        let html = r#"<form><input type="hidden" name="fb_dtsg" value="AQH9x:42" autocomplete="off" /></form>"#;
        let token = extract_secret_token(html).unwrap();
        assert_eq!(token.expose(), "AQH9x:42");
    }

    #[test]
    fn test_extract_secret_token_missing() {
        assert!(extract_secret_token("<html><body>checkpoint</body></html>").is_none());
    }

    #[test]
    fn test_find_user_id_uses_c_user_cookie() {
        let cookies = vec![
            SessionCookie::new("datr", "abc"),
            SessionCookie::new("c_user", "100001"),
            SessionCookie::new("xs", "xyz"),
        ];
        assert_eq!(find_user_id(&cookies).as_deref(), Some("100001"));
    }

    #[test]
    fn test_find_user_id_missing_or_empty() {
        assert!(find_user_id(&[SessionCookie::new("datr", "abc")]).is_none());
        assert!(find_user_id(&[SessionCookie::new("c_user", "")]).is_none());
    }
}
