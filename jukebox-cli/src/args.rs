use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "jukebox-cli")]
#[command(about = "Browse a song library and control the jukebox player", long_about = None)]
pub struct Args {
    /// JSON song library: `[{"id": 1, "artist": "...", "title": "..."}]`
    #[arg(long)]
    pub library: Option<PathBuf>,

    /// Player server base URL
    #[arg(long)]
    pub server: Option<String>,

    /// Rows per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Config file (defaults to config.toml in the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long)]
    pub log_level: Option<String>,
}
