mod discography;
mod download_log;

pub use discography::DiscographyManager;
pub use download_log::DOWNLOAD_LOG_FILE;
pub use download_log::DownloadLogManager;
