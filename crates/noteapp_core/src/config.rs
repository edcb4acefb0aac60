//! Application configuration.
//!
//! # Responsibility
//! - Resolve the per-user data directory holding the notes database.
//! - Collect tunables (log level, auto-save delay) with env overrides.
//!
//! # Invariants
//! - `data_dir` always ends with the application name unless overridden.
//! - Resolution never panics; missing platform variables are errors.

use crate::controller::AUTOSAVE_DELAY;
use crate::logging::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_NAME: &str = "NoteApp";
pub const DB_FILE_NAME: &str = "notes.db";
const LOG_DIR_NAME: &str = "logs";

pub const ENV_DATA_DIR: &str = "NOTEAPP_DATA_DIR";
pub const ENV_LOG_LEVEL: &str = "NOTEAPP_LOG_LEVEL";
pub const ENV_AUTOSAVE_MS: &str = "NOTEAPP_AUTOSAVE_MS";

#[derive(Debug)]
pub enum ConfigError {
    /// A platform variable needed to locate the data directory is unset.
    MissingEnv(&'static str),
    /// No home directory could be determined.
    NoHomeDir,
    InvalidValue { key: &'static str, value: String },
    Io(std::io::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingEnv(key) => write!(f, "{key} environment variable not set"),
            Self::NoHomeDir => write!(f, "cannot determine home directory"),
            Self::InvalidValue { key, value } => write!(f, "invalid value `{value}` for {key}"),
            Self::Io(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Resolved application settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub autosave_delay: Duration,
}

impl AppConfig {
    /// Settings rooted at `data_dir` with default tunables.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            log_level: default_log_level().to_string(),
            autosave_delay: AUTOSAVE_DELAY,
        }
    }

    /// Resolves settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, which stands in for `env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = match lookup(ENV_DATA_DIR).filter(|value| !value.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => application_data_dir(std::env::consts::OS, &lookup)?,
        };
        let mut config = Self::with_data_dir(data_dir);

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        if let Some(raw) = lookup(ENV_AUTOSAVE_MS) {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_AUTOSAVE_MS,
                    value: raw.clone(),
                })?;
            config.autosave_delay = Duration::from_millis(millis);
        }
        Ok(config)
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }

    /// Creates the data directory if missing.
    pub fn ensure_data_dir(&self) -> Result<&Path, ConfigError> {
        std::fs::create_dir_all(&self.data_dir).map_err(ConfigError::Io)?;
        Ok(&self.data_dir)
    }
}

/// Per-user application data directory for `os`, joined with `APP_NAME`.
///
/// - windows: `%APPDATA%`
/// - macos: `~/Library/Application Support`
/// - linux: `$XDG_DATA_HOME`, else `~/.local/share`
/// - other: home directory
pub fn application_data_dir(
    os: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf, ConfigError> {
    let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
    let home = || non_empty("HOME").map(PathBuf::from).ok_or(ConfigError::NoHomeDir);

    let base = match os {
        "windows" => non_empty("APPDATA")
            .map(PathBuf::from)
            .ok_or(ConfigError::MissingEnv("APPDATA"))?,
        "macos" => home()?.join("Library").join("Application Support"),
        "linux" => match non_empty("XDG_DATA_HOME") {
            Some(dir) => PathBuf::from(dir),
            None => home()?.join(".local").join("share"),
        },
        _ => home()?,
    };
    Ok(base.join(APP_NAME))
}
