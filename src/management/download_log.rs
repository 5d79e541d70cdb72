use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::Res;

pub const DOWNLOAD_LOG_FILE: &str = "downloaded_log.json";

/// Record of albums already downloaded, keyed by artist name.
///
/// Stored as `{ "<artist>": ["<album>", ...] }` next to the downloaded
/// music, and rewritten after every successful download.
pub struct DownloadLogManager {
    path: PathBuf,
    entries: BTreeMap<String, Vec<String>>,
}

impl DownloadLogManager {
    /// Loads the log from `download_dir`, starting empty when none exists.
    pub async fn load(download_dir: &Path) -> Res<Self> {
        let path = download_dir.join(DOWNLOAD_LOG_FILE);
        let entries = if path.is_file() {
            let content = async_fs::read_to_string(&path).await?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    pub async fn persist(&self) -> Res<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.entries)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }

    pub fn contains(&self, artist: &str, album: &str) -> bool {
        self.entries
            .get(artist)
            .is_some_and(|albums| albums.iter().any(|a| a == album))
    }

    /// Records a downloaded album and persists the log.
    pub async fn record(&mut self, artist: &str, album: &str) -> Res<()> {
        if !self.contains(artist, album) {
            self.entries
                .entry(artist.to_string())
                .or_default()
                .push(album.to_string());
        }
        self.persist().await
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
