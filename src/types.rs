use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Bearer credential returned by the client-credentials exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl Credential {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: None,
            expires_in: None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.access_token
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumArtist {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub album_type: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub total_tracks: Option<u32>,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
}

/// One page of a paginated listing. `next` is the continuation URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next: None,
            total: None,
        }
    }
}

pub type AlbumPage = Page<Album>;

/// Raw result of the combined artist/album search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub artists: Page<Artist>,
    #[serde(default)]
    pub albums: Page<Album>,
}

/// Deduplicated discography of one artist.
#[derive(Debug, Clone, PartialEq)]
pub struct Discography {
    pub artist: Artist,
    pub albums: Vec<Album>,
}

/// On-disk shape of a discography.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscographyFile {
    pub id_artista: String,
    pub nome_artista: String,
    pub albuns: Vec<AlbumEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumEntry {
    pub id_album: String,
    pub nome_album: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_album: Option<String>,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    #[tabled(rename = "type")]
    pub album_type: String,
    pub released: String,
}
