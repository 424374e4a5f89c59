//! Authenticated session context.
//!
//! A [`Session`] is created once by the authenticator and only read after
//! that. Secret values are redacted in `Debug` output to prevent accidental
//! logging.

use std::fmt;

/// The per-session token the site requires on every POST (`fb_dtsg`).
#[derive(Clone, PartialEq, Eq)]
pub struct SecretToken(String);

impl SecretToken {
    /// Wraps a token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the token value.
    ///
    /// Token values are sensitive; avoid logging the return value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretToken([REDACTED])")
    }
}

/// A cookie harvested during login.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// Cookie name.
    pub name: String,
    /// Cookie value (sensitive, never log).
    value: String,
}

impl SessionCookie {
    /// Creates a cookie.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns the cookie value.
    ///
    /// Cookie values are sensitive; avoid logging the return value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

// Custom Debug impl that redacts the cookie value.
impl fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCookie")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Everything needed to make authenticated requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user_id: String,
    secret_token: SecretToken,
    cookies: Vec<SessionCookie>,
}

impl Session {
    /// Creates a session.
    #[must_use]
    pub fn new(
        user_id: impl Into<String>,
        secret_token: SecretToken,
        cookies: Vec<SessionCookie>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            secret_token,
            cookies,
        }
    }

    /// Id of the logged-in user.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Token attached to every POST.
    #[must_use]
    pub fn secret_token(&self) -> &SecretToken {
        &self.secret_token
    }

    /// Cookies attached to every request.
    #[must_use]
    pub fn cookies(&self) -> &[SessionCookie] {
        &self.cookies
    }

    /// Value for the `Cookie` request header, or `None` without cookies.
    #[must_use]
    pub fn cookie_header(&self) -> Option<String> {
        cookie_header(&self.cookies)
    }
}

/// Joins cookies into a `Cookie` request header value; `None` when empty.
pub(crate) fn cookie_header(cookies: &[SessionCookie]) -> Option<String> {
    if cookies.is_empty() {
        return None;
    }
    Some(
        cookies
            .iter()
            .map(|cookie| format!("{}={}", cookie.name, cookie.value))
            .collect::<Vec<_>>()
            .join("; "),
    )
}

/// Login credentials.
#[derive(Clone)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    password: String,
}

impl Credentials {
    /// Creates credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(
            "100001",
            SecretToken::new("AQHtoken-secret"),
            vec![
                SessionCookie::new("c_user", "100001"),
                SessionCookie::new("xs", "xs-secret-value"),
            ],
        )
    }

    #[test]
    fn test_cookie_header_joins_all_cookies() {
        assert_eq!(
            session().cookie_header().as_deref(),
            Some("c_user=100001; xs=xs-secret-value")
        );
    }

    #[test]
    fn test_cookie_header_none_without_cookies() {
        let session = Session::new("1", SecretToken::new("t"), Vec::new());
        assert!(session.cookie_header().is_none());
    }

    #[test]
    fn test_cookie_header_from_bare_cookie_list() {
        let cookies = [
            SessionCookie::new("datr", "abc"),
            SessionCookie::new("c_user", "100001"),
        ];
        assert_eq!(
            cookie_header(&cookies).as_deref(),
            Some("datr=abc; c_user=100001")
        );
        assert!(cookie_header(&[]).is_none());
    }

    #[test]
    fn test_session_debug_never_contains_secrets() {
        let debug_output = format!("{:?}", session());
        assert!(!debug_output.contains("AQHtoken-secret"), "{debug_output}");
        assert!(!debug_output.contains("xs-secret-value"), "{debug_output}");
        assert!(debug_output.contains("[REDACTED]"), "{debug_output}");
        assert!(debug_output.contains("100001"), "{debug_output}");
    }

    #[test]
    fn test_credentials_debug_never_contains_password() {
        let credentials = Credentials::new("me@example.com", "hunter2");
        let debug_output = format!("{credentials:?}");
        assert!(!debug_output.contains("hunter2"), "{debug_output}");
        assert!(debug_output.contains("me@example.com"), "{debug_output}");
    }
}
