//! Paginated fan listing.
//!
//! [`fan_pages`] is a lazy stream over the batches of one listing: it starts
//! at offset 0, advances by `limit` after every non-empty batch and ends at
//! the first empty batch. A maximum offset guard stops endpoints that never
//! return an empty batch.

use futures_util::Stream;
use futures_util::stream;
use tracing::{debug, instrument};

use super::decode::decode_batch;
use super::model::{Fan, FanKind, Page};
use crate::auth::Session;
use crate::error::FanError;
use crate::transport::Transport;

/// Listing endpoint path on the main host.
pub const FANS_PATH: &str = "pages/admin/people_and_other_pages/entquery/";

/// Records requested per batch.
pub const DEFAULT_PAGE_SIZE: usize = 1000;

/// Highest offset requested before giving up.
///
/// The site stops listing at roughly 7000 entries, so real pages end far
/// below this.
pub const DEFAULT_MAX_OFFSET: usize = 100_000;

/// Pagination settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    limit: usize,
    max_offset: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            max_offset: DEFAULT_MAX_OFFSET,
        }
    }
}

impl FetchOptions {
    /// Creates pagination settings.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::InvalidInput`] when `limit` is zero.
    pub fn new(limit: usize, max_offset: usize) -> Result<Self, FanError> {
        if limit == 0 {
            return Err(FanError::invalid_input("limit", "must be at least 1"));
        }
        Ok(Self { limit, max_offset })
    }

    /// Records requested per batch.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Highest offset that will be requested.
    #[must_use]
    pub fn max_offset(&self) -> usize {
        self.max_offset
    }
}

/// Streams the batches of one listing, in offset order.
///
/// The stream ends after the first empty batch, or after yielding the first
/// error. Offsets requested are `0, limit, 2*limit, ...` with no gaps or
/// repeats; an offset beyond `max_offset` yields
/// [`FanError::PaginationLimit`] without issuing a request.
pub fn fan_pages<'a, T>(
    transport: &'a T,
    session: &'a Session,
    page: &'a Page,
    kind: FanKind,
    options: FetchOptions,
) -> impl Stream<Item = Result<Vec<Fan>, FanError>> + 'a
where
    T: Transport + ?Sized,
{
    stream::try_unfold(0_usize, move |offset| async move {
        if offset > options.max_offset {
            return Err(FanError::PaginationLimit {
                kind,
                max_offset: options.max_offset,
            });
        }

        let batch = fetch_batch(transport, session, page, kind, offset, options.limit).await?;
        if batch.is_empty() {
            debug!(%kind, offset, "empty batch; listing exhausted");
            return Ok(None);
        }

        Ok(Some((batch, offset.saturating_add(options.limit))))
    })
}

/// Fetches and decodes one batch.
///
/// # Errors
///
/// Returns the transport error, or [`FanError::Parse`] if the body cannot be
/// decoded.
#[instrument(skip(transport, session, page), fields(page_id = %page.id))]
pub async fn fetch_batch<T>(
    transport: &T,
    session: &Session,
    page: &Page,
    kind: FanKind,
    offset: usize,
    limit: usize,
) -> Result<Vec<Fan>, FanError>
where
    T: Transport + ?Sized,
{
    let form = [
        ("query_edge_key", kind.endpoint_key().to_string()),
        ("page_id", page.id.clone()),
        ("offset", offset.to_string()),
        ("limit", limit.to_string()),
    ];
    let body = transport.post(session, FANS_PATH, &form).await?;
    let batch = decode_batch(&body, kind)?;
    debug!(records = batch.len(), "decoded batch");
    Ok(batch)
}
