//! Log setup.
//!
//! The terminal belongs to the UI, so logs always go to a file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create log file {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to install log subscriber: {0}")]
    Init(String),
}

/// Maps a level name to a tracing level.
///
/// Returns `None` for names that are not recognised.
pub fn parse_level(s: &str) -> Option<Level> {
    match s.trim().to_uppercase().as_str() {
        "TRACE" => Some(Level::TRACE),
        "DEBUG" => Some(Level::DEBUG),
        "INFO" => Some(Level::INFO),
        "WARN" | "WARNING" => Some(Level::WARN),
        "ERROR" => Some(Level::ERROR),
        _ => None,
    }
}

/// Picks the level from CLI and config values, CLI first.
///
/// Unknown names fall back to INFO with a warning on stderr; the UI has not
/// taken over the terminal yet at this point.
pub fn resolve_level(cli_level: Option<&str>, config_level: Option<&str>) -> Level {
    match cli_level.or(config_level) {
        Some(s) => parse_level(s).unwrap_or_else(|| {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
            Level::INFO
        }),
        None => Level::INFO,
    }
}

/// `<data_local_dir>/tcounter/logs/tcounter.log`, or `./tcounter.log`.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("tcounter").join("logs").join("tcounter.log"))
        .unwrap_or_else(|| PathBuf::from("tcounter.log"))
}

pub fn init_logging(path: &Path, level: Level) -> Result<(), LoggingError> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let log_file = fs::File::create(path).map_err(|source| LoggingError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::from_level(level).into()))
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}
