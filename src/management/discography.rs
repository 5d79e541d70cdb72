use std::path::{Path, PathBuf};

use crate::{
    Res,
    types::{AlbumEntry, Discography, DiscographyFile},
    utils,
};

/// Reads and writes discography files in the data directory.
pub struct DiscographyManager {
    file: DiscographyFile,
}

impl DiscographyManager {
    pub fn new(file: DiscographyFile) -> Self {
        Self { file }
    }

    /// Converts a collected discography into its on-disk shape.
    pub fn from_discography(discography: &Discography) -> Self {
        let albuns = discography
            .albums
            .iter()
            .map(|a| AlbumEntry {
                id_album: a.id.clone(),
                nome_album: a.name.clone(),
                url_album: Some(utils::album_url(&a.id)),
            })
            .collect();

        Self::new(DiscographyFile {
            id_artista: discography.artist.id.clone(),
            nome_artista: discography.artist.name.clone(),
            albuns,
        })
    }

    pub async fn load(path: &Path) -> Res<Self> {
        let content = async_fs::read_to_string(path).await?;
        let file: DiscographyFile = serde_json::from_str(&content)?;
        Ok(Self { file })
    }

    /// Writes the file into `data_dir`, creating the directory if needed.
    ///
    /// Returns the path of the written file, named after the artist with
    /// [`utils::artist_file_name`].
    pub async fn persist(&self, data_dir: &Path) -> Res<PathBuf> {
        async_fs::create_dir_all(data_dir).await?;

        let path = self.path_in(data_dir);
        let json = serde_json::to_string_pretty(&self.file)?;
        async_fs::write(&path, json).await?;
        Ok(path)
    }

    pub fn path_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(utils::artist_file_name(&self.file.nome_artista))
    }

    /// Lists the `*.json` files in `data_dir`, sorted by file name.
    ///
    /// A missing directory yields an empty list.
    pub fn list(data_dir: &Path) -> Res<Vec<PathBuf>> {
        if !data_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files: Vec<PathBuf> = std::fs::read_dir(data_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        Ok(files)
    }

    pub fn file(&self) -> &DiscographyFile {
        &self.file
    }

    pub fn count(&self) -> usize {
        self.file.albuns.len()
    }
}
