#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use discofetch::{
    Error, Res,
    config::Credentials,
    spotify::{CatalogApi, PageSource},
    types::{Album, AlbumArtist, AlbumPage, Artist, Credential, Page, SearchResponse},
};

pub const API_URL: &str = "https://api.test/v1";

pub fn album(id: &str, name: &str) -> Album {
    Album {
        id: id.to_string(),
        name: name.to_string(),
        album_type: Some("album".to_string()),
        release_date: Some("2020-01-17".to_string()),
        total_tracks: Some(12),
        artists: Vec::new(),
    }
}

pub fn artist(id: &str, name: &str) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn album_by(id: &str, name: &str, artist_id: &str, artist_name: &str) -> Album {
    Album {
        artists: vec![AlbumArtist {
            id: artist_id.to_string(),
            name: artist_name.to_string(),
        }],
        ..album(id, name)
    }
}

pub fn credentials() -> Credentials {
    Credentials {
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
    }
}

/// Chains `pages` together: page `i` points at `{API_URL}/pages/{i + 1}`,
/// the last one has no `next`. The first page is served for `first_url`.
pub fn chained_pages(first_url: &str, pages: Vec<Vec<Album>>) -> HashMap<String, AlbumPage> {
    let count = pages.len();
    pages
        .into_iter()
        .enumerate()
        .map(|(i, items)| {
            let url = if i == 0 {
                first_url.to_string()
            } else {
                format!("{}/pages/{}", API_URL, i)
            };
            let next = (i + 1 < count).then(|| format!("{}/pages/{}", API_URL, i + 1));
            (
                url,
                Page {
                    items,
                    next,
                    total: None,
                },
            )
        })
        .collect()
}

/// Serves album pages from memory and records every request.
#[derive(Default)]
pub struct FakePages {
    pub pages: HashMap<String, AlbumPage>,
    pub requests: Mutex<Vec<String>>,
    pub tokens: Mutex<Vec<String>>,
}

impl FakePages {
    pub fn new(pages: HashMap<String, AlbumPage>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageSource for FakePages {
    fn api_url(&self) -> &str {
        API_URL
    }

    async fn fetch_album_page(&self, url: &str, credential: &Credential) -> Res<AlbumPage> {
        self.requests.lock().unwrap().push(url.to_string());
        self.tokens
            .lock()
            .unwrap()
            .push(credential.access_token.clone());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::Fetch(format!("404 Not Found for url ({})", url)))
    }
}

/// Full catalog fake: fixed token, fixed search result, in-memory pages.
pub struct FakeCatalog {
    pub token: String,
    pub results: SearchResponse,
    pub pages: FakePages,
    pub calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new(token: &str, results: SearchResponse, pages: HashMap<String, AlbumPage>) -> Self {
        Self {
            token: token.to_string(),
            results,
            pages: FakePages::new(pages),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PageSource for FakeCatalog {
    fn api_url(&self) -> &str {
        API_URL
    }

    async fn fetch_album_page(&self, url: &str, credential: &Credential) -> Res<AlbumPage> {
        self.calls.lock().unwrap().push(format!("page {}", url));
        self.pages.fetch_album_page(url, credential).await
    }
}

impl CatalogApi for FakeCatalog {
    async fn acquire_token(&self, credentials: &Credentials) -> Res<Credential> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("token {}", credentials.client_id));
        Ok(Credential::new(self.token.clone()))
    }

    async fn search(&self, query: &str, credential: &Credential) -> Res<SearchResponse> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("search {} as {}", query, credential.access_token));
        Ok(self.results.clone())
    }
}
