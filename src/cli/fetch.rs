use tabled::Table;

use crate::{
    Error,
    cli::{DownloadMode, download, prompt, spinner},
    config::Config,
    error, info,
    management::DiscographyManager,
    spotify::{self, SpotifyClient},
    success, utils, warning,
};

/// Looks up an artist and writes its discography to the data directory.
///
/// Missing Spotify credentials end the command before anything is asked.
/// Prompts for the search text when `query` is `None`. A blank query ends
/// the command without touching the network. When `mode` asks for it,
/// the written file is handed to the downloader afterwards; download
/// failures are reported but the JSON file stays in place.
pub async fn fetch(config: &Config, query: Option<String>, mode: DownloadMode) {
    let credentials = match config.require_credentials() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let query = match query {
        Some(q) => q,
        None => match prompt::ask("Search artist or album: ") {
            Ok(q) => q,
            Err(e) => error!("Cannot read search text. Err: {}", e),
        },
    };

    if utils::normalize_query(&query).is_none() {
        warning!("Empty search. Exiting...");
        return;
    }

    let client = match SpotifyClient::new(config) {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let pb = spinner("Requesting access token...");
    let result =
        spotify::build_discography(&client, credentials, &query, config.max_pages, &pb).await;
    pb.finish_and_clear();

    let discography = match result {
        Ok(d) => d,
        Err(Error::NoArtistFound) => {
            warning!("No artist found for \"{}\"", query.trim());
            return;
        }
        Err(e) => error!("Cannot build discography. Err: {}", e),
    };

    info!(
        "Artist: {} ({})",
        discography.artist.name, discography.artist.id
    );
    println!(
        "{}",
        Table::new(utils::album_table_rows(&discography.albums))
    );

    let manager = DiscographyManager::from_discography(&discography);
    let path = match manager.persist(&config.data_dir).await {
        Ok(p) => p,
        Err(e) => error!("Cannot write discography. Err: {}", e),
    };
    success!("JSON written: {} ({} albums)", path.display(), manager.count());

    if let Some(selection) = mode.selection() {
        download::download_file(config, manager.file(), selection).await;
    }
}
