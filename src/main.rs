use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use discofetch::{
    cli::{self, DownloadMode},
    config::{self, Config},
    downloader::DownloadSelection,
    error, warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search an artist or album and save the artist's discography
    Fetch(FetchOptions),

    /// Download the albums of a saved discography
    Download(DownloadOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone, Default)]
pub struct FetchOptions {
    /// Search text; prompted for when omitted
    #[clap(long, short)]
    pub query: Option<String>,

    /// Download step to run after the JSON file is written
    #[clap(long, value_enum, default_value_t = DownloadMode::None)]
    pub download: DownloadMode,
}

#[derive(Parser, Debug, Clone)]
pub struct DownloadOptions {
    /// Discography file; picked from the data directory when omitted
    pub file: Option<PathBuf>,

    /// Download only the first album
    #[clap(long)]
    pub first: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn load_config() -> Config {
    match Config::from_env() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Fetch(FetchOptions::default())) {
        Command::Fetch(opt) => {
            let config = load_config();
            cli::fetch(&config, opt.query, opt.download).await
        }
        Command::Download(opt) => {
            let config = load_config();
            let selection = if opt.first {
                DownloadSelection::First
            } else {
                DownloadSelection::All
            };
            cli::download(&config, opt.file, selection).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
