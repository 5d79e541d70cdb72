//! # CLI Module
//!
//! Command implementations behind the `discofetch` binary. Each command
//! loads what it needs, drives the library, and reports through the
//! `info!`/`success!`/`warning!`/`error!` macros.
//!
//! ## Commands
//!
//! - [`fetch`] - Search, collect the discography, write `data/<artist>.json`,
//!   optionally download
//! - [`download`] - Run the downloader over an existing discography file
//!
//! ```bash
//! discofetch                               # prompt for a search
//! discofetch fetch --query "Mac Miller"    # no prompt
//! discofetch fetch -q "Mac Miller" --download first
//! discofetch download data/mac_miller.json
//! ```
//!
//! Errors end the command through `error!`, which exits with code 1. An
//! empty search and a search without any artist end it with code 0.

use std::time::Duration;

use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};

use crate::downloader::DownloadSelection;

mod download;
mod fetch;
pub mod prompt;

pub use download::download;
pub use download::download_file;
pub use fetch::fetch;

/// Download step run after a successful fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DownloadMode {
    /// Only write the JSON file
    #[default]
    None,
    /// Download the first album
    First,
    /// Download every album
    All,
}

impl DownloadMode {
    pub fn selection(self) -> Option<DownloadSelection> {
        match self {
            DownloadMode::None => None,
            DownloadMode::First => Some(DownloadSelection::First),
            DownloadMode::All => Some(DownloadSelection::All),
        }
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
