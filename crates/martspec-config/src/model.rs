//! Typed configuration models.
//!
//! # Design
//! - `SiteConfig` is always fully validated; raw inputs arrive as
//!   `ConfigLayer`s and are checked field by field when applied.

use martspec_i18n::{DEFAULT_LOCALE, LocaleCode};
use martspec_telemetry::{DEFAULT_LOG_LEVEL, LogFormat};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::defaults::{DEFAULT_ASSET_BASE, DEFAULT_SITEMAP_URL};
use crate::error::ConfigResult;
use crate::validate::{
    normalize_asset_base, parse_log_format, parse_log_level, parse_locale, parse_sitemap_url,
};

/// Validated site settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Locale used when no preferred language is supported.
    pub default_locale: LocaleCode,
    /// Preferred language tags in priority order (browser style).
    pub preferred_languages: Vec<String>,
    /// App Store application id used by download buttons.
    pub app_id: Option<u64>,
    /// Prefix applied to asset paths, always ending in `/`.
    pub asset_base: String,
    /// Sitemap checked by the link checker.
    pub sitemap_url: Url,
    /// Log level or `EnvFilter` directive.
    pub log_level: String,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE,
            preferred_languages: Vec::new(),
            app_id: None,
            asset_base: DEFAULT_ASSET_BASE.to_string(),
            sitemap_url: default_sitemap_url(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::infer(),
        }
    }
}

impl SiteConfig {
    /// Overlay `layer` on top of the current values.
    ///
    /// Fields absent from the layer keep their value. Nothing is modified when
    /// any present field is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::InvalidField`] for the first invalid field.
    pub fn apply(&mut self, layer: ConfigLayer) -> ConfigResult<()> {
        let mut next = self.clone();
        if let Some(value) = layer.default_locale {
            next.default_locale = parse_locale("default_locale", &value)?;
        }
        if let Some(languages) = layer.preferred_languages {
            next.preferred_languages = languages;
        }
        if let Some(app_id) = layer.app_id {
            next.app_id = Some(app_id);
        }
        if let Some(value) = layer.asset_base {
            next.asset_base = normalize_asset_base(&value)?;
        }
        if let Some(value) = layer.sitemap_url {
            next.sitemap_url = parse_sitemap_url(&value)?;
        }
        if let Some(value) = layer.log_level {
            next.log_level = parse_log_level(&value)?;
        }
        if let Some(value) = layer.log_format {
            next.log_format = parse_log_format(&value)?;
        }
        *self = next;
        Ok(())
    }
}

/// Partial settings from one source. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    /// Fallback locale tag.
    pub default_locale: Option<String>,
    /// Preferred language tags.
    pub preferred_languages: Option<Vec<String>>,
    /// App Store application id.
    pub app_id: Option<u64>,
    /// Asset base path or URL.
    pub asset_base: Option<String>,
    /// Sitemap URL.
    pub sitemap_url: Option<String>,
    /// Log level directive.
    pub log_level: Option<String>,
    /// Log format name.
    pub log_format: Option<String>,
}

fn default_sitemap_url() -> Url {
    Url::parse(DEFAULT_SITEMAP_URL).unwrap_or_else(|_| unreachable!("default sitemap URL parses"))
}
