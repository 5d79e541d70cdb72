//! discofetch library
//!
//! Looks an artist up on the Spotify Web API, collects the complete album and
//! single discography, stores it as JSON and hands the album URLs to an
//! external downloader.
//!
//! # Modules
//!
//! - `cli` - Command implementations used by the binary
//! - `config` - Environment loading and the explicit `Config` struct
//! - `downloader` - Runs the external downloader over a discography file
//! - `error` - Crate error type
//! - `management` - Persisted discography files and the download log
//! - `spotify` - Spotify Web API client, search and discography collection
//! - `types` - Data structures and type definitions
//! - `utils` - File naming and URL helpers

pub mod cli;
pub mod config;
pub mod downloader;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// Result alias used across the crate.
///
/// # Example
///
/// ```
/// use discofetch::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching for {}", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Wrote {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing, so it is
/// only used at the top of the call chain where nothing is left to clean up.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, e.g. a single album download that failed.
///
/// # Example
///
/// ```
/// warning!("Download failed for {}", album);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
