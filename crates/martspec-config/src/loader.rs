//! Configuration sources: JSON documents and environment variables.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::defaults::{
    ENV_APP_ID, ENV_ASSET_BASE, ENV_DEFAULT_LOCALE, ENV_LANGUAGES, ENV_LOG_FORMAT, ENV_LOG_LEVEL,
    ENV_SITEMAP_URL,
};
use crate::error::{ConfigError, ConfigResult};
use crate::model::{ConfigLayer, SiteConfig};
use crate::validate::{parse_app_id, parse_language_list};

impl SiteConfig {
    /// Defaults overlaid with the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] for malformed variables.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with variables resolved through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] for malformed variables.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::load_with(None, lookup)
    }

    /// Defaults overlaid with a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] or [`ConfigError::Parse`] when the document
    /// cannot be read, and [`ConfigError::InvalidField`] for invalid values.
    pub fn from_json_file(path: &Path) -> ConfigResult<Self> {
        Self::load_with(Some(path), |_| None)
    }

    /// Defaults, then the optional JSON document, then the process environment.
    ///
    /// # Errors
    ///
    /// See [`SiteConfig::load_with`].
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        Self::load_with(path, |name| std::env::var(name).ok())
    }

    /// Defaults, then the optional JSON document, then `lookup`.
    ///
    /// # Errors
    ///
    /// Returns the first read, parse or validation error encountered.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = path {
            config.apply(layer_from_json_file(path)?)?;
            debug!(path = %path.display(), "applied configuration file");
        }
        config.apply(layer_from_lookup(lookup)?)?;
        Ok(config)
    }
}

/// Read a [`ConfigLayer`] from a JSON document.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] when the file cannot be read and
/// [`ConfigError::Parse`] for malformed JSON or unknown fields.
pub fn layer_from_json_file(path: &Path) -> ConfigResult<ConfigLayer> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a [`ConfigLayer`] from environment-style variables.
///
/// Empty values are treated as unset.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the app id is not numeric.
pub fn layer_from_lookup<F>(lookup: F) -> ConfigResult<ConfigLayer>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
    let app_id = read(ENV_APP_ID).map(|value| parse_app_id(&value)).transpose()?;
    Ok(ConfigLayer {
        default_locale: read(ENV_DEFAULT_LOCALE),
        preferred_languages: read(ENV_LANGUAGES).map(|value| parse_language_list(&value)),
        app_id,
        asset_base: read(ENV_ASSET_BASE),
        sitemap_url: read(ENV_SITEMAP_URL),
        log_level: read(ENV_LOG_LEVEL),
        log_format: read(ENV_LOG_FORMAT),
    })
}
