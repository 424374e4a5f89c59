//! Page resolution and fan fetching bound to one session.

use std::pin::pin;

use futures_util::TryStreamExt;
use tracing::{info, instrument};

use super::fetch::{FetchOptions, fan_pages};
use super::model::{Fan, FanCollection, FanKind, Page};
use super::page::{extract_page_id, validate_page_name};
use crate::auth::Session;
use crate::error::FanError;
use crate::transport::Transport;

/// Resolves pages and fetches their fans through one transport and session.
///
/// # Example
///
/// ```no_run
/// use luster_core::{
///     Authenticator, Credentials, Endpoints, FanClient, HttpTimeouts, HttpTransport,
/// };
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let endpoints = Endpoints::default();
/// let auth = Authenticator::new(endpoints.clone(), HttpTimeouts::default())?;
/// let session = auth.login(&Credentials::new("me@example.com", "secret")).await?;
///
/// let client = FanClient::new(HttpTransport::new(endpoints, HttpTimeouts::default())?, session);
/// let page = client.open_page("mypage").await?;
/// let fans = client.fetch_fans(&page).await?;
/// println!("{} fans", fans.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct FanClient<T> {
    transport: T,
    session: Session,
    options: FetchOptions,
}

impl<T: Transport> FanClient<T> {
    /// Creates a client with default pagination settings.
    #[must_use]
    pub fn new(transport: T, session: Session) -> Self {
        Self {
            transport,
            session,
            options: FetchOptions::default(),
        }
    }

    /// Replaces the pagination settings.
    #[must_use]
    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolves a page name to its internal id.
    ///
    /// # Errors
    ///
    /// - [`FanError::InvalidInput`] for an unusable page name
    /// - [`FanError::Transport`] if the page cannot be fetched
    /// - [`FanError::NotFound`] if the page markup has no id marker
    #[instrument(skip(self))]
    pub async fn open_page(&self, name: &str) -> Result<Page, FanError> {
        validate_page_name(name)?;
        let path = urlencoding::encode(name);
        let html = self.transport.get(&self.session, &path, &[]).await?;
        let id = extract_page_id(&html).ok_or_else(|| FanError::not_found(name))?;
        info!(page = name, page_id = %id, "opened page");
        Ok(Page {
            id,
            name: name.to_string(),
        })
    }

    /// Fetches all likers, then all followers, of `page`.
    ///
    /// # Errors
    ///
    /// Returns the first error of either listing; no partial collection is
    /// returned.
    pub async fn fetch_fans(&self, page: &Page) -> Result<FanCollection, FanError> {
        self.fetch_fans_with_progress(page, |_, _| {}).await
    }

    /// Like [`fetch_fans`](Self::fetch_fans), reporting `(kind, fetched so far)`
    /// after every batch.
    ///
    /// # Errors
    ///
    /// Returns the first error of either listing.
    #[instrument(skip(self, page, on_batch), fields(page = %page.name, page_id = %page.id))]
    pub async fn fetch_fans_with_progress(
        &self,
        page: &Page,
        mut on_batch: impl FnMut(FanKind, usize),
    ) -> Result<FanCollection, FanError> {
        let mut fans = FanCollection::new();
        for kind in FanKind::ALL {
            let mut fetched = 0_usize;
            let mut batches = pin!(fan_pages(
                &self.transport,
                &self.session,
                page,
                kind,
                self.options
            ));
            while let Some(batch) = batches.try_next().await? {
                fetched += batch.len();
                fans.extend(batch);
                on_batch(kind, fetched);
            }
            info!(%kind, count = fetched, "fetched fans");
        }
        Ok(fans)
    }

    /// Fetches every fan of one kind.
    ///
    /// # Errors
    ///
    /// Returns the first transport or decode error.
    pub async fn fetch_fans_of_kind(
        &self,
        page: &Page,
        kind: FanKind,
    ) -> Result<Vec<Fan>, FanError> {
        fan_pages(&self.transport, &self.session, page, kind, self.options)
            .try_concat()
            .await
    }
}
