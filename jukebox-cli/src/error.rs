use thiserror::Error;

use datatable::ConfigError;

/// Errors that end the program.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid library file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid table config: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Unknown log level: {0}")]
    LogLevel(String),

    #[error("No library file (pass --library or set `library` in config.toml)")]
    NoLibrary,

    #[error("Library has no songs to show")]
    NoTable,
}
