//! # Spotify Integration Module
//!
//! Thin client for the three Spotify Web API calls discofetch needs:
//!
//! ```text
//! Config (credentials, base URLs, timeout)
//!          ↓
//! SpotifyClient
//!     ├── auth      POST /api/token            client credentials → bearer
//!     ├── search    GET  /search?type=artist,album&limit=5
//!     └── releases  GET  /artists/{id}/albums  paginated via `next`
//!          ↓
//! reqwest
//! ```
//!
//! The calls sit behind two traits. [`PageSource`] is all the discography
//! collector needs; [`CatalogApi`] adds the token exchange and the search so
//! [`build_discography`] can run the whole lookup against any implementation.
//!
//! Every request is sent once. There is no retry, no backoff and no
//! rate-limit handling: a failed call ends the run with the matching
//! [`Error`](crate::Error) variant.

use std::future::Future;

use indicatif::ProgressBar;
use reqwest::Client;

use crate::{
    Error, Res,
    config::{Config, Credentials},
    types::{AlbumPage, Credential, Discography, SearchResponse},
    utils,
};

pub mod auth;
pub mod releases;
pub mod search;

/// Source of discography pages.
pub trait PageSource {
    /// Web API base URL, without trailing slash.
    fn api_url(&self) -> &str;

    /// Fetches one page of an artist's albums from `url`.
    fn fetch_album_page(
        &self,
        url: &str,
        credential: &Credential,
    ) -> impl Future<Output = Res<AlbumPage>> + Send;
}

/// The full set of catalog calls used by a lookup.
pub trait CatalogApi: PageSource {
    fn acquire_token(
        &self,
        credentials: &Credentials,
    ) -> impl Future<Output = Res<Credential>> + Send;

    fn search(
        &self,
        query: &str,
        credential: &Credential,
    ) -> impl Future<Output = Res<SearchResponse>> + Send;
}

/// HTTP client for the Spotify Web API.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token_url: String,
}

impl SpotifyClient {
    /// Builds a client that applies `config.timeout` to every request.
    pub fn new(config: &Config) -> Res<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            token_url: config.token_url.clone(),
        })
    }
}

impl PageSource for SpotifyClient {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    async fn fetch_album_page(&self, url: &str, credential: &Credential) -> Res<AlbumPage> {
        releases::get_album_page(&self.http, url, credential).await
    }
}

impl CatalogApi for SpotifyClient {
    async fn acquire_token(&self, credentials: &Credentials) -> Res<Credential> {
        auth::request_token(&self.http, &self.token_url, credentials).await
    }

    async fn search(&self, query: &str, credential: &Credential) -> Res<SearchResponse> {
        search::search(&self.http, &self.api_url, query, credential).await
    }
}

/// Runs a complete lookup: token, search, artist resolution, discography.
///
/// The query goes to the search endpoint exactly as given. A blank query is
/// rejected with [`Error::EmptyQuery`] before any request is made.
///
/// # Arguments
///
/// * `catalog` - Catalog implementation, usually a [`SpotifyClient`]
/// * `credentials` - Client id/secret for the token exchange
/// * `query` - Free-text artist or album search
/// * `max_pages` - Cap on discography pages, see [`releases::collect_albums`]
/// * `pb` - Spinner updated with the current step; pass `ProgressBar::hidden()`
///   to stay silent
pub async fn build_discography<C: CatalogApi>(
    catalog: &C,
    credentials: &Credentials,
    query: &str,
    max_pages: usize,
    pb: &ProgressBar,
) -> Res<Discography> {
    if utils::normalize_query(query).is_none() {
        return Err(Error::EmptyQuery);
    }

    pb.set_message("Requesting access token...");
    let credential = catalog.acquire_token(credentials).await?;

    pb.set_message(format!("Searching for \"{}\"...", query));
    let results = catalog.search(query, &credential).await?;
    let artist = search::resolve_artist(&results)?;

    pb.set_message(format!("Fetching albums of {}...", artist.name));
    let albums = releases::collect_albums_with(
        catalog,
        &artist.id,
        &credential,
        max_pages,
        |pages, items| {
            pb.set_message(format!(
                "Fetching albums of {}... {} items on {} pages",
                artist.name, items, pages
            ));
        },
    )
    .await?;

    Ok(Discography { artist, albums })
}
