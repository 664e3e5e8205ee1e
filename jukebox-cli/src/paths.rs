//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "jukebox";
const APPLICATION: &str = "jukebox-cli";

const LATEST_LOG: &str = "latest.log";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Directory holding `config.toml`.
///
/// - Linux: `$XDG_CONFIG_HOME/jukebox-cli` or `~/.config/jukebox-cli`
/// - macOS: `~/Library/Application Support/dev.jukebox.jukebox-cli`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Directory holding logs.
///
/// - Linux: `$XDG_CACHE_HOME/jukebox-cli` or `~/.cache/jukebox-cli`
/// - macOS: `~/Library/Caches/dev.jukebox.jukebox-cli`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Library used when neither the command line nor the config names one.
pub fn default_library() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("library.json"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive the previous `latest.log` under a timestamp and prune old logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, cache.join(format!("{timestamp}.log")));
    }

    prune_logs(&cache, MAX_OLD_LOGS);
}

/// Remove archived logs in `dir`, oldest first, until `keep` remain.
fn prune_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archived: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    archived.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    let excess = archived.len().saturating_sub(keep);
    for entry in archived.iter().take(excess) {
        let _ = fs::remove_file(entry.path());
    }
}
