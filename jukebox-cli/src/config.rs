//! Config file and command-line overrides.

use std::fs;
use std::path::{Path, PathBuf};

use datatable::TableConfig;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::args::Args;
use crate::error::CliError;
use crate::paths;

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the player server.
    pub server_url: String,

    /// Song library file.
    pub library: Option<PathBuf>,

    pub log_level: String,

    pub table: TableConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            library: None,
            log_level: "debug".to_string(),
            table: TableConfig::default(),
        }
    }
}

impl Config {
    /// Load `explicit`, or the default config file if it exists.
    ///
    /// A missing default file gives the default config; a missing explicit
    /// file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CliError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match paths::config_file() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };
        Self::parse(&fs::read_to_string(path)?)
    }

    pub fn parse(text: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(text)?)
    }

    /// Apply command-line flags on top of file values.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(server) = &args.server {
            self.server_url = server.clone();
        }
        if let Some(library) = &args.library {
            self.library = Some(library.clone());
        }
        if let Some(page_size) = args.page_size {
            self.table.page_size = page_size;
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        self
    }

    pub fn library_path(&self) -> Option<PathBuf> {
        self.library.clone().or_else(paths::default_library)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, CliError> {
        self.log_level
            .parse()
            .map_err(|_| CliError::LogLevel(self.log_level.clone()))
    }
}
