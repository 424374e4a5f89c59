//! Fan listing for a single page.
//!
//! # Overview
//!
//! - [`model`] - Profiles, fan records and the collection returned to callers
//! - [`decode`] - Decoding of the listing endpoint's guarded, single-quoted bodies
//! - [`page`] - Page name validation and page id extraction
//! - [`fetch`] - Lazy paginated stream over one listing
//! - [`FanClient`] - Page resolution and the likers-then-followers fetch
//!
//! Every operation takes an authenticated [`Session`](crate::auth::Session)
//! and goes through a [`Transport`](crate::transport::Transport), so the whole
//! pipeline can run against an in-memory transport in tests.

mod client;
pub mod decode;
pub mod fetch;
pub mod model;
pub mod page;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::FanClient;
pub use decode::decode_batch;
pub use fetch::{DEFAULT_MAX_OFFSET, DEFAULT_PAGE_SIZE, FANS_PATH, FetchOptions, fan_pages};
pub use model::{Fan, FanCollection, FanKind, Page, Profile};
pub use page::{extract_page_id, validate_page_name};
