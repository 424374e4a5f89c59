//! Luster Core Library
//!
//! This library logs into a social network's web interface, resolves a
//! public page's internal id, pages through the page's likers and followers
//! and renders the combined list as delimited text.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`auth`] - Credential login producing an immutable [`Session`]
//! - [`transport`] - Authenticated GET/POST behind the [`Transport`] trait
//! - [`fans`] - Page resolution and paginated fan fetching via [`FanClient`]
//! - [`render`] - CSV/TSV rendering of a [`FanCollection`]
//! - [`endpoints`] - Base URLs of the login host and the main host
//! - [`error`] - The [`FanError`] taxonomy shared by every layer

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod endpoints;
pub mod error;
pub mod fans;
pub mod render;
pub mod transport;

// Re-export commonly used types
pub use auth::{Authenticator, Credentials, SecretToken, Session, SessionCookie};
pub use endpoints::{DEFAULT_MOBILE_BASE_URL, DEFAULT_WWW_BASE_URL, Endpoints};
pub use error::FanError;
pub use fans::{Fan, FanClient, FanCollection, FanKind, FetchOptions, Page, Profile};
pub use render::{Delimiter, render_csv, render_delimited};
pub use transport::{HttpTimeouts, HttpTransport, Transport};
