//! Host configuration, read from the environment.

use std::path::PathBuf;

use urarulla_session::domain::settings::SessionSettings;

use crate::error::AppError;

/// Default content directory, relative to the working directory.
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// Host configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory holding the six content files.
    pub content_dir: PathBuf,
    /// Session settings.
    pub settings: SessionSettings,
    /// Emit JSON logs.
    pub log_json: bool,
    /// Fixed seed for question draws.
    pub rng_seed: Option<u64>,
}

impl AppConfig {
    /// Reads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// See [`Self::from_lookup`].
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`:
    ///
    /// - `CONTENT_DIR`: content directory (default `content`)
    /// - `SETTINGS_PATH`: optional YAML session settings file
    /// - `MULTIPLAYER`: optional `true`/`false` override
    /// - `LOG_FORMAT`: `json` for JSON logs
    /// - `RNG_SEED`: optional `u64` seed
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a value does not parse or the settings
    /// file cannot be read, and `AppError::Domain` if the settings are out
    /// of range.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let content_dir =
            PathBuf::from(lookup("CONTENT_DIR").unwrap_or_else(|| DEFAULT_CONTENT_DIR.to_owned()));

        let mut settings = match lookup("SETTINGS_PATH") {
            Some(path) => {
                let yaml = std::fs::read_to_string(&path)
                    .map_err(|e| AppError::Config(format!("cannot read {path}: {e}")))?;
                SessionSettings::from_yaml_str(&yaml)?
            }
            None => SessionSettings::default(),
        };

        if let Some(value) = lookup("MULTIPLAYER") {
            settings.is_multiplayer = value
                .parse::<bool>()
                .map_err(|e| AppError::Config(format!("MULTIPLAYER must be true or false: {e}")))?;
        }

        let log_json = lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));

        let rng_seed = lookup("RNG_SEED")
            .map(|s| {
                s.parse::<u64>()
                    .map_err(|e| AppError::Config(format!("RNG_SEED must be a valid u64: {e}")))
            })
            .transpose()?;

        Ok(Self {
            content_dir,
            settings,
            log_json,
            rng_seed,
        })
    }
}
