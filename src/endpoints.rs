//! Base URLs of the remote service.
//!
//! Login runs against the mobile host; pages and the listing API live on the
//! main host. Both are overridable so tests can point them at a mock server.

use url::Url;

use crate::error::FanError;

/// Default mobile host used for the login flow.
pub const DEFAULT_MOBILE_BASE_URL: &str = "https://m.facebook.com";

/// Default main host used for pages and the listing API.
pub const DEFAULT_WWW_BASE_URL: &str = "https://www.facebook.com";

/// Base URLs for every request the crate issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    mobile: Url,
    www: Url,
}

impl Default for Endpoints {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self {
            mobile: parse_base(DEFAULT_MOBILE_BASE_URL).expect("static mobile base URL is valid"),
            www: parse_base(DEFAULT_WWW_BASE_URL).expect("static www base URL is valid"),
        }
    }
}

impl Endpoints {
    /// Creates endpoints with custom base URLs (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FanError::InvalidInput`] if either URL does not parse or is
    /// not http(s).
    pub fn with_base_urls(mobile: &str, www: &str) -> Result<Self, FanError> {
        Ok(Self {
            mobile: parse_base(mobile)?,
            www: parse_base(www)?,
        })
    }

    /// Mobile host base URL.
    #[must_use]
    pub fn mobile(&self) -> &Url {
        &self.mobile
    }

    /// Main host base URL.
    #[must_use]
    pub fn www(&self) -> &Url {
        &self.www
    }

    /// Joins `path` onto the mobile host.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::InvalidInput`] if the joined URL is invalid.
    pub fn mobile_url(&self, path: &str) -> Result<Url, FanError> {
        join(&self.mobile, path)
    }

    /// Joins `path` onto the main host.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::InvalidInput`] if the joined URL is invalid.
    pub fn www_url(&self, path: &str) -> Result<Url, FanError> {
        join(&self.www, path)
    }
}

fn parse_base(raw: &str) -> Result<Url, FanError> {
    // Trailing slash keeps the base path when joining relative paths.
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&normalized)
        .map_err(|error| FanError::invalid_input("base URL", format!("'{raw}': {error}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(FanError::invalid_input(
            "base URL",
            format!("'{raw}' must use http or https"),
        ));
    }
    Ok(url)
}

fn join(base: &Url, path: &str) -> Result<Url, FanError> {
    base.join(path.trim_start_matches('/'))
        .map_err(|error| FanError::invalid_input("request path", format!("'{path}': {error}")))
}
