use reqwest::Client;

use crate::{
    Error, Res,
    types::{Artist, Credential, SearchResponse},
};

/// Result count requested per type.
pub const SEARCH_LIMIT: u32 = 5;

/// Builds the combined artist/album search URL.
///
/// The query is percent-encoded as-is (space becomes `%20`); it is neither
/// trimmed nor rewritten.
pub fn search_url(api_url: &str, query: &str) -> String {
    format!(
        "{uri}/search?q={q}&type=artist,album&limit={limit}",
        uri = api_url,
        q = urlencoding::encode(query),
        limit = SEARCH_LIMIT
    )
}

/// Runs the combined artist/album search.
///
/// Both result lists are returned verbatim, in the order the API ranked
/// them.
///
/// # Arguments
///
/// * `http` - Shared client; its timeout applies to the request
/// * `api_url` - Web API base without trailing slash
/// * `query` - Search text, sent as given
/// * `credential` - Bearer token from [`request_token`](super::auth::request_token)
///
/// # Returns
///
/// Up to [`SEARCH_LIMIT`] artists and albums. Missing lists decode as empty.
///
/// # Errors
///
/// [`Error::Search`] on transport failure, non-2xx status, or a body that
/// does not decode.
pub async fn search(
    http: &Client,
    api_url: &str,
    query: &str,
    credential: &Credential,
) -> Res<SearchResponse> {
    let response = http
        .get(search_url(api_url, query))
        .bearer_auth(credential.as_str())
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::Search(e.to_string()))?;

    response
        .json::<SearchResponse>()
        .await
        .map_err(|e| Error::Search(e.to_string()))
}

/// Picks the artist to build the discography for.
///
/// The first artist hit wins, regardless of album hits. Without artist hits
/// the primary artist of the first album is used.
///
/// # Errors
///
/// [`Error::NoArtistFound`] when neither list yields a candidate.
pub fn resolve_artist(results: &SearchResponse) -> Res<Artist> {
    if let Some(artist) = results.artists.items.first() {
        return Ok(artist.clone());
    }

    results
        .albums
        .items
        .first()
        .and_then(|album| album.artists.first())
        .map(|a| Artist {
            id: a.id.clone(),
            name: a.name.clone(),
        })
        .ok_or(Error::NoArtistFound)
}
