use std::path::PathBuf;

use crate::{
    cli::prompt,
    config::Config,
    downloader::{DownloadSelection, Downloader},
    error, info,
    management::{DiscographyManager, DownloadLogManager},
    success,
    types::DiscographyFile,
    warning,
};

/// Runs the downloader over a discography file.
///
/// Without `file`, the discography files in the data directory are listed
/// and the user picks one by number.
pub async fn download(config: &Config, file: Option<PathBuf>, selection: DownloadSelection) {
    let path = match file {
        Some(p) => p,
        None => match pick_file(config) {
            Some(p) => p,
            None => return,
        },
    };

    let manager = match DiscographyManager::load(&path).await {
        Ok(m) => m,
        Err(e) => error!("Cannot read {}. Err: {}", path.display(), e),
    };

    download_file(config, manager.file(), selection).await;
}

/// Downloads the selected albums of an already loaded discography.
pub async fn download_file(config: &Config, file: &DiscographyFile, selection: DownloadSelection) {
    let downloader = match Downloader::new(&config.downloader, &config.download_dir) {
        Ok(d) => d,
        Err(e) => error!("{}", e),
    };

    let mut log = match DownloadLogManager::load(&config.download_dir).await {
        Ok(l) => l,
        Err(e) => {
            error!("Cannot read download log. Err: {}", e);
        }
    };

    info!(
        "Starting downloads for {} into {}",
        file.nome_artista,
        config.download_dir.display()
    );
    let report = downloader.download(file, selection, &mut log).await;

    if report.failed > 0 {
        warning!(
            "{} downloaded, {} skipped, {} failed",
            report.downloaded,
            report.skipped,
            report.failed
        );
    } else {
        success!(
            "{} downloaded, {} skipped",
            report.downloaded,
            report.skipped
        );
    }
}

fn pick_file(config: &Config) -> Option<PathBuf> {
    let files = match DiscographyManager::list(&config.data_dir) {
        Ok(f) => f,
        Err(e) => error!(
            "Cannot list {}. Err: {}",
            config.data_dir.display(),
            e
        ),
    };

    if files.is_empty() {
        warning!(
            "No discography files found in {}",
            config.data_dir.display()
        );
        return None;
    }

    info!("Available discography files:");
    for (i, f) in files.iter().enumerate() {
        let name = f.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        println!("{}. {}", i + 1, name);
    }

    let answer = match prompt::ask("\nNumber of the file to download: ") {
        Ok(a) => a,
        Err(e) => error!("Cannot read choice. Err: {}", e),
    };

    match prompt::parse_choice(&answer, files.len()) {
        Some(idx) => Some(files[idx].clone()),
        None => {
            warning!("Invalid choice. Exiting...");
            None
        }
    }
}
