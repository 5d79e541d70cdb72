//! Hands album URLs from a discography file to an external downloader.
//!
//! The downloader (spotDL by default) runs once per album, inside
//! `<root>/<Artist>/<Album>/`, with the album URL as its last argument.
//! A failed album is reported and skipped; it never stops the remaining
//! downloads and never touches the discography file.

use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::{
    Error, Res, info,
    management::DownloadLogManager,
    success,
    types::{AlbumEntry, DiscographyFile},
    utils, warning,
};

/// Which albums of a discography file to download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadSelection {
    First,
    All,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

pub struct Downloader {
    program: String,
    args: Vec<String>,
    root: PathBuf,
}

impl Downloader {
    /// Creates a downloader from a command line such as `["python", "-m", "spotdl"]`.
    pub fn new(command: &[String], root: impl Into<PathBuf>) -> Res<Self> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| Error::Config("downloader command is empty".to_string()))?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
            root: root.into(),
        })
    }

    pub fn album_dir(&self, artist_name: &str, album_name: &str) -> PathBuf {
        self.root
            .join(utils::sanitize_folder_name(artist_name))
            .join(utils::sanitize_folder_name(album_name))
    }

    /// Downloads the selected albums one after another.
    ///
    /// Albums without a URL, or already present in `log` for this artist,
    /// are skipped. Every successful download is recorded in `log` right
    /// away.
    pub async fn download(
        &self,
        file: &DiscographyFile,
        selection: DownloadSelection,
        log: &mut DownloadLogManager,
    ) -> DownloadReport {
        let mut report = DownloadReport::default();

        let albums: &[AlbumEntry] = match selection {
            DownloadSelection::First => &file.albuns[..file.albuns.len().min(1)],
            DownloadSelection::All => &file.albuns,
        };

        if albums.is_empty() {
            warning!("No albums found in the discography of {}", file.nome_artista);
            return report;
        }

        for album in albums {
            let Some(url) = album.url_album.as_deref() else {
                report.skipped += 1;
                continue;
            };

            if log.contains(&file.nome_artista, &album.nome_album) {
                info!(
                    "Already downloaded: {} - {}",
                    file.nome_artista, album.nome_album
                );
                report.skipped += 1;
                continue;
            }

            let dir = self.album_dir(&file.nome_artista, &album.nome_album);
            info!(
                "Downloading: {} - {} ({})",
                file.nome_artista, album.nome_album, url
            );

            match self.run(url, &dir).await {
                Ok(()) => {
                    success!("Done: {} - {}", file.nome_artista, album.nome_album);
                    report.downloaded += 1;
                    if let Err(e) = log.record(&file.nome_artista, &album.nome_album).await {
                        warning!(
                            "Cannot update download log {}. Err: {}",
                            log.path().display(),
                            e
                        );
                    }
                }
                Err(e) => {
                    warning!(
                        "Download failed: {} - {}. Err: {}",
                        file.nome_artista,
                        album.nome_album,
                        e
                    );
                    report.failed += 1;
                }
            }
        }

        report
    }

    /// Runs the downloader for one URL with `dir` as working directory.
    pub async fn run(&self, url: &str, dir: &Path) -> Res<()> {
        async_fs::create_dir_all(dir).await?;

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .current_dir(dir)
            .status()
            .await
            .map_err(|e| Error::Download(format!("cannot run {}: {}", self.program, e)))?;

        if !status.success() {
            return Err(Error::Download(format!(
                "{} exited with {}",
                self.program, status
            )));
        }
        Ok(())
    }
}
