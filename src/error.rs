use thiserror::Error;

/// Errors produced while building or downloading a discography.
///
/// Every step of the run maps its failure onto one variant; the binary prints
/// the message and exits. Nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    /// The client-credentials exchange failed or returned no `access_token`.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The combined artist/album search failed.
    #[error("search failed: {0}")]
    Search(String),

    /// Neither an artist nor an album artist was returned by the search.
    #[error("no artist found")]
    NoArtistFound,

    /// A discography page could not be fetched or decoded.
    #[error("failed to fetch albums: {0}")]
    Fetch(String),

    /// The catalog kept handing out continuation references.
    #[error("pagination exceeded {limit} pages")]
    PaginationOverrun { limit: usize },

    /// The search text was empty or whitespace only.
    #[error("empty search query")]
    EmptyQuery,

    /// Required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The external downloader could not be run.
    #[error("download failed: {0}")]
    Download(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
