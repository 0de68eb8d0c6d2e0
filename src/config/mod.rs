//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `DIAG` prefix
//! and `__` (double underscore) as the nesting separator; everything has a
//! sensible default so a bare environment works out of the box.
//!
//! # Example
//!
//! ```no_run
//! use transmission_diag::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! println!("catalogue locale: {}", config.catalogue.locale);
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;
use std::path::PathBuf;

fn default_config_dir() -> PathBuf {
    PathBuf::from("config")
}

fn default_locale() -> String {
    "fr".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Catalogue location and language.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogueConfig {
    /// Directory holding `questions_<locale>.json` documents.
    #[serde(default = "default_config_dir")]
    pub dir: PathBuf,

    /// Locale of the catalogue document to load.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            dir: default_config_dir(),
            locale: default_locale(),
        }
    }
}

/// Answer-file storage location.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory where answer files are read and written.
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalogue configuration (directory, locale).
    #[serde(default)]
    pub catalogue: CatalogueConfig,

    /// Answer-file configuration (data directory).
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `DIAG__CATALOGUE__LOCALE=en` sets `catalogue.locale`, and so on.
    /// A `.env` file is honored when present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().prefix("DIAG").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.catalogue.locale.trim().is_empty() {
            return Err(ValidationError::new("catalogue.locale must not be empty"));
        }
        if !self
            .catalogue
            .locale
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ValidationError::new(format!(
                "catalogue.locale contains invalid characters: {}",
                self.catalogue.locale
            )));
        }
        Ok(())
    }
}
