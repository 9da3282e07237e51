use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tvseries-scraper")]
#[command(about = "Scrape the top-rated TV series listing into a CSV file")]
pub struct Cli {
    /// TOML config file (defaults to the user config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Listing page to fetch
    #[arg(long)]
    pub url: Option<String>,

    /// CSV file to write
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Where to keep a raw copy of the fetched page
    #[arg(long, conflicts_with = "no_backup")]
    pub backup: Option<PathBuf>,

    /// Do not write the raw page backup
    #[arg(long)]
    pub no_backup: bool,

    /// Parse a saved HTML page instead of fetching
    #[arg(short = 'i', long)]
    pub input: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}
