use crate::types::{Album, AlbumTableRow};

pub const ALBUM_URL_BASE: &str = "https://open.spotify.com/album";

/// Characters that are not allowed in folder names on Windows.
const FORBIDDEN_FOLDER_CHARS: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Returns the trimmed query, or `None` when there is nothing to search for.
pub fn normalize_query(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// File name of an artist's discography: lowercase, whitespace runs as `_`.
///
/// Characters rejected by [`sanitize_folder_name`] become `_` as well, so
/// the file always lands directly in the data directory.
pub fn artist_file_name(artist_name: &str) -> String {
    let mut slug = String::with_capacity(artist_name.len());
    let mut in_whitespace = false;
    for c in sanitize_folder_name(&artist_name.to_lowercase()).chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    format!("{}.json", slug)
}

pub fn sanitize_folder_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if FORBIDDEN_FOLDER_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

pub fn album_url(album_id: &str) -> String {
    format!("{}/{}", ALBUM_URL_BASE, album_id)
}

pub fn album_table_rows(albums: &[Album]) -> Vec<AlbumTableRow> {
    albums
        .iter()
        .enumerate()
        .map(|(i, a)| AlbumTableRow {
            position: i + 1,
            name: a.name.clone(),
            album_type: a.album_type.clone().unwrap_or_default(),
            released: a.release_date.clone().unwrap_or_default(),
        })
        .collect()
}
