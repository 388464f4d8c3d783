//! # epoch-config
//!
//! Layered configuration loading for Epoch using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EPOCH_*` prefix, `__` as separator)
//! 2. Project-level `.epoch/config.toml`
//! 3. User-level `~/.config/epoch/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `EPOCH_API__BASE_URL` -> `api.base_url`,
//! `EPOCH_YEARS__DEFAULT_START` -> `years.default_start`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use epoch_config::EpochConfig;
//!
//! let config = EpochConfig::load_with_dotenv().expect("config");
//! println!("articles endpoint: {}", config.api.articles_endpoint());
//! ```

mod api;
mod error;
mod map;
mod years;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use map::MapConfig;
pub use years::YearsConfig;

use epoch_core::parse_year;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EpochConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub years: YearsConfig,
}

impl EpochConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or the merged
    /// values do not pass [`Self::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an explicit figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".epoch/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("EPOCH_").split("__"))
    }

    /// Check cross-field constraints serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unparseable default year
    /// label, a default start later than the default end, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let start = parse_year(&self.years.default_start)
            .map_err(|e| invalid("years.default_start", e))?;
        let end =
            parse_year(&self.years.default_end).map_err(|e| invalid("years.default_end", e))?;
        if start > end {
            return Err(invalid(
                "years.default_start",
                format!(
                    "'{}' is later than '{}'",
                    self.years.default_start, self.years.default_end
                ),
            ));
        }
        if self.api.timeout_secs == 0 {
            return Err(invalid("api.timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("epoch").join("config.toml"))
    }
}

fn invalid(field: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
