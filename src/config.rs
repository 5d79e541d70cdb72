//! Configuration management for discofetch.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. The resulting [`Config`] is built once at startup and passed
//! explicitly to the parts that need it.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current directory
//! 3. `.env` in the local data directory
//! 4. Defaults for everything but the Spotify credentials

use std::{env, path::PathBuf, time::Duration};

use crate::{Error, Res};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_DOWNLOAD_DIR: &str = "downloads";
pub const DEFAULT_DOWNLOADER: &str = "python -m spotdl";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_PAGES: usize = 1000;

/// Loads environment variables from `.env` files.
///
/// Reads `./.env` first, then `discofetch/.env` inside the platform local
/// data directory. `dotenv` never overrides variables that are already set,
/// so the working-directory file wins over the data-directory one. Missing
/// files are fine; the data directory is created so the user has a place to
/// drop one.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/discofetch/.env`
/// - macOS: `~/Library/Application Support/discofetch/.env`
/// - Windows: `%LOCALAPPDATA%/discofetch/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("discofetch/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if let Err(e) = dotenv::dotenv() {
        if !e.not_found() {
            return Err(e.to_string());
        }
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Client-credentials pair handed to the token endpoint.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

/// Runtime configuration.
///
/// # Fields
///
/// - `credentials` - `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET`, checked
///   with [`Config::require_credentials`] by commands that talk to Spotify
/// - `api_url` - `SPOTIFY_API_URL`, Web API base without trailing slash
/// - `token_url` - `SPOTIFY_TOKEN_URL`
/// - `data_dir` - `DISCOFETCH_DATA_DIR`, where discography JSON files go
/// - `download_dir` - `DISCOFETCH_DOWNLOAD_DIR`, root of `Artist/Album` folders
/// - `downloader` - `DISCOFETCH_DOWNLOADER`, program and leading arguments
/// - `timeout` - `DISCOFETCH_TIMEOUT_SECS`, per HTTP request
/// - `max_pages` - `DISCOFETCH_MAX_PAGES`, cap on discography pages
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Option<Credentials>,
    pub api_url: String,
    pub token_url: String,
    pub data_dir: PathBuf,
    pub download_dir: PathBuf,
    pub downloader: Vec<String>,
    pub timeout: Duration,
    pub max_pages: usize,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if a numeric setting does not parse or is zero.
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let client_id = optional("SPOTIFY_CLIENT_ID", "");
        let client_secret = optional("SPOTIFY_CLIENT_SECRET", "");
        let credentials = (!client_id.is_empty() && !client_secret.is_empty()).then(|| {
            Credentials {
                client_id,
                client_secret,
            }
        });

        let downloader: Vec<String> = optional("DISCOFETCH_DOWNLOADER", DEFAULT_DOWNLOADER)
            .split_whitespace()
            .map(String::from)
            .collect();

        let timeout_secs = parse_number(
            "DISCOFETCH_TIMEOUT_SECS",
            &optional("DISCOFETCH_TIMEOUT_SECS", &DEFAULT_TIMEOUT_SECS.to_string()),
        )?;
        let max_pages = parse_number(
            "DISCOFETCH_MAX_PAGES",
            &optional("DISCOFETCH_MAX_PAGES", &DEFAULT_MAX_PAGES.to_string()),
        )?;
        if timeout_secs == 0 {
            return Err(Error::Config(
                "DISCOFETCH_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }
        if max_pages == 0 {
            return Err(Error::Config(
                "DISCOFETCH_MAX_PAGES must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            credentials,
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            token_url: optional("SPOTIFY_TOKEN_URL", DEFAULT_TOKEN_URL),
            data_dir: PathBuf::from(optional("DISCOFETCH_DATA_DIR", DEFAULT_DATA_DIR)),
            download_dir: PathBuf::from(optional("DISCOFETCH_DOWNLOAD_DIR", DEFAULT_DOWNLOAD_DIR)),
            downloader,
            timeout: Duration::from_secs(timeout_secs as u64),
            max_pages,
        })
    }

    /// Returns the Spotify credentials.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] when either variable is missing or blank.
    pub fn require_credentials(&self) -> Res<&Credentials> {
        self.credentials.as_ref().ok_or_else(|| {
            Error::Config("SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET must be set".to_string())
        })
    }
}

fn parse_number(key: &str, value: &str) -> Res<usize> {
    value
        .parse::<usize>()
        .map_err(|_| Error::Config(format!("{} must be a number, got '{}'", key, value)))
}
