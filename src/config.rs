use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Cli;

pub const DEFAULT_TARGET_URL: &str =
    "http://www.imdb.com/search/title?num_votes=5000,&sort=user_rating,desc&start=1&title_type=tv_series";
pub const DEFAULT_BACKUP_PATH: &str = "tvseries.html";
pub const DEFAULT_OUTPUT_PATH: &str = "tvseries.csv";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything the pipeline needs to know about one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub target_url: String,
    pub backup_path: Option<PathBuf>,
    pub output_path: PathBuf,
    pub user_agent: String,
    pub timeout: Duration,
    /// Read the page from this file instead of fetching it.
    pub input: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_url: DEFAULT_TARGET_URL.to_string(),
            backup_path: Some(PathBuf::from(DEFAULT_BACKUP_PATH)),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: format!("tvseries-scraper/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            input: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    target_url: Option<String>,
    backup_path: Option<PathBuf>,
    /// `false` turns the raw page backup off.
    backup: Option<bool>,
    output_path: Option<PathBuf>,
    user_agent: Option<String>,
    timeout_secs: Option<u64>,
}

impl Config {
    /// Defaults, then the config file, then `TVSERIES_URL`, then CLI flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = Config::default();

        let file_path = cli.config.clone().or_else(|| {
            let path = get_config_path();
            path.exists().then_some(path)
        });
        if let Some(path) = file_path {
            config.apply_file(&read_config_file(&path)?);
        }

        if let Ok(url) = env::var("TVSERIES_URL") {
            config.target_url = url;
        }

        config.apply_cli(cli);
        Ok(config)
    }

    fn apply_file(&mut self, file: &ConfigFile) {
        if let Some(url) = &file.target_url {
            self.target_url = url.clone();
        }
        if let Some(path) = &file.backup_path {
            self.backup_path = Some(path.clone());
        }
        if file.backup == Some(false) {
            self.backup_path = None;
        }
        if let Some(path) = &file.output_path {
            self.output_path = path.clone();
        }
        if let Some(agent) = &file.user_agent {
            self.user_agent = agent.clone();
        }
        if let Some(secs) = file.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(url) = &cli.url {
            self.target_url = url.clone();
        }
        if let Some(path) = &cli.output {
            self.output_path = path.clone();
        }
        if let Some(path) = &cli.backup {
            self.backup_path = Some(path.clone());
        }
        if cli.no_backup {
            self.backup_path = None;
        }
        if let Some(secs) = cli.timeout {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(path) = &cli.input {
            self.input = Some(path.clone());
        }
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config file {}", path.display()))
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("tvseries-scraper"))
        // If the standard path could not be found (e.g.`$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}
