use std::collections::HashMap;

use reqwest::Client;

use crate::{
    Error, Res,
    spotify::PageSource,
    types::{Album, AlbumPage, Credential},
};

/// Release groups requested from the artist albums endpoint.
pub const INCLUDE_GROUPS: &str = "album,single";

/// Page size requested from the artist albums endpoint.
pub const PAGE_SIZE: u32 = 50;

/// Builds the URL of the first discography page.
///
/// Later pages are addressed by the `next` URL the API returns, which
/// already carries these parameters.
pub fn artist_albums_url(api_url: &str, artist_id: &str) -> String {
    format!(
        "{uri}/artists/{id}/albums?include_groups={include_groups}&limit={limit}",
        uri = api_url,
        id = artist_id,
        include_groups = INCLUDE_GROUPS,
        limit = PAGE_SIZE
    )
}

/// Fetches a single page of an artist's albums.
///
/// # Errors
///
/// [`Error::Fetch`] on transport failure, non-2xx status, or a body that
/// does not decode.
pub async fn get_album_page(http: &Client, url: &str, credential: &Credential) -> Res<AlbumPage> {
    let response = http
        .get(url)
        .bearer_auth(credential.as_str())
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| Error::Fetch(e.to_string()))?;

    response
        .json::<AlbumPage>()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))
}

/// Collects an artist's complete album and single discography.
///
/// See [`collect_albums_with`]; this variant reports no progress.
pub async fn collect_albums<S: PageSource>(
    source: &S,
    artist_id: &str,
    credential: &Credential,
    max_pages: usize,
) -> Res<Vec<Album>> {
    collect_albums_with(source, artist_id, credential, max_pages, |_, _| {}).await
}

/// Collects an artist's complete album and single discography.
///
/// Pages are fetched one after another, following the `next` reference of
/// each response verbatim until the API reports none. All items are
/// accumulated in fetch order and then deduplicated by name with
/// [`dedupe_by_name`].
///
/// # Arguments
///
/// * `source` - Page source, usually a [`SpotifyClient`](super::SpotifyClient)
/// * `artist_id` - Spotify id of the artist
/// * `credential` - Bearer token sent with every page request
/// * `max_pages` - Most pages fetched before giving up
/// * `on_page` - Called after every page with the number of pages and items
///   fetched so far
///
/// # Returns
///
/// Albums and singles in fetch order, one per name.
///
/// # Pagination Cap
///
/// The API is trusted to end the stream, but a source that keeps returning
/// `next` is stopped after `max_pages` pages with
/// [`Error::PaginationOverrun`].
///
/// # Errors
///
/// Any page failure aborts the whole collection; nothing fetched so far is
/// returned.
pub async fn collect_albums_with<S, F>(
    source: &S,
    artist_id: &str,
    credential: &Credential,
    max_pages: usize,
    mut on_page: F,
) -> Res<Vec<Album>>
where
    S: PageSource,
    F: FnMut(usize, usize),
{
    let mut next_url = Some(artist_albums_url(source.api_url(), artist_id));
    let mut fetched: Vec<Album> = Vec::new();
    let mut pages = 0;

    while let Some(url) = next_url {
        if pages >= max_pages {
            return Err(Error::PaginationOverrun { limit: max_pages });
        }

        let page = source.fetch_album_page(&url, credential).await?;
        pages += 1;
        fetched.extend(page.items);
        on_page(pages, fetched.len());

        next_url = page.next;
    }

    Ok(dedupe_by_name(fetched))
}

/// Keeps one album per display name, the later one winning.
///
/// A repeated name replaces the earlier album in place, so the result keeps
/// the position of the first occurrence while carrying the last-fetched
/// album. The output is fully determined by the input order.
pub fn dedupe_by_name(albums: Vec<Album>) -> Vec<Album> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<Album> = Vec::with_capacity(albums.len());

    for album in albums {
        match positions.get(&album.name) {
            Some(&idx) => unique[idx] = album,
            None => {
                positions.insert(album.name.clone(), unique.len());
                unique.push(album);
            }
        }
    }

    unique
}
