//! Validation helpers and parsing utilities for configuration values.

use martspec_i18n::LocaleCode;
use martspec_telemetry::LogFormat;
use url::Url;

use crate::error::{ConfigError, ConfigResult};

/// Parse a locale tag into a supported locale.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the tag is not supported.
pub fn parse_locale(field: &'static str, value: &str) -> ConfigResult<LocaleCode> {
    LocaleCode::from_lang_tag(value)
        .ok_or_else(|| ConfigError::invalid(field, value, "unsupported_locale"))
}

/// Split a comma separated language preference list, keeping `;q=` weights.
#[must_use]
pub fn parse_language_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Parse a numeric App Store application id.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the value is not a positive
/// integer.
pub fn parse_app_id(value: &str) -> ConfigResult<u64> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ConfigError::invalid("app_id", value, "not_a_positive_integer")),
        Ok(id) => Ok(id),
    }
}

/// Parse an absolute `http`/`https` URL for the sitemap.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for malformed URLs or other schemes.
pub fn parse_sitemap_url(value: &str) -> ConfigResult<Url> {
    let url = Url::parse(value.trim())
        .map_err(|_| ConfigError::invalid("sitemap_url", value, "malformed_url"))?;
    if matches!(url.scheme(), "http" | "https") {
        Ok(url)
    } else {
        Err(ConfigError::invalid("sitemap_url", value, "unsupported_scheme"))
    }
}

/// Validate a log level or `EnvFilter` directive string.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for empty values or values containing
/// whitespace.
pub fn parse_log_level(value: &str) -> ConfigResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return Err(ConfigError::invalid("log_level", value, "invalid_directive"));
    }
    Ok(trimmed.to_string())
}

/// Parse the log output format.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for names other than `json`/`pretty`.
pub fn parse_log_format(value: &str) -> ConfigResult<LogFormat> {
    value
        .parse::<LogFormat>()
        .map_err(|_| ConfigError::invalid("log_format", value, "unknown_format"))
}

/// Normalise the asset base to an absolute path or URL ending in `/`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the base is neither a rooted path
/// nor an `http`/`https` URL.
pub fn normalize_asset_base(value: &str) -> ConfigResult<String> {
    let trimmed = value.trim();
    let accepted = trimmed.starts_with('/')
        || trimmed.starts_with("https://")
        || trimmed.starts_with("http://");
    if !accepted {
        return Err(ConfigError::invalid("asset_base", value, "not_absolute"));
    }
    if trimmed.ends_with('/') {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{trimmed}/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason_of(err: &ConfigError) -> &'static str {
        match err {
            ConfigError::InvalidField { reason, .. } => *reason,
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn locale_and_language_list() {
        assert_eq!(
            parse_locale("default_locale", "ru-RU").ok(),
            Some(LocaleCode::Ru)
        );
        let err = parse_locale("default_locale", "xx").expect_err("unsupported");
        assert_eq!(reason_of(&err), "unsupported_locale");
        assert_eq!(
            parse_language_list(" fr-CA, ,en;q=0.5 "),
            vec!["fr-CA".to_string(), "en;q=0.5".to_string()]
        );
    }

    #[test]
    fn app_id_must_be_positive() {
        assert_eq!(parse_app_id(" 1480987642 ").ok(), Some(1_480_987_642));
        assert_eq!(
            reason_of(&parse_app_id("0").expect_err("zero")),
            "not_a_positive_integer"
        );
        assert!(parse_app_id("abc").is_err());
    }

    #[test]
    fn sitemap_url_requires_http_scheme() {
        assert!(parse_sitemap_url("https://martspec.com/sitemap.xml").is_ok());
        assert_eq!(
            reason_of(&parse_sitemap_url("ftp://martspec.com/s.xml").expect_err("ftp")),
            "unsupported_scheme"
        );
        assert_eq!(
            reason_of(&parse_sitemap_url("not a url").expect_err("garbage")),
            "malformed_url"
        );
    }

    #[test]
    fn log_settings_are_validated() {
        assert_eq!(
            parse_log_level("martspec_events=debug,info").ok().as_deref(),
            Some("martspec_events=debug,info")
        );
        assert!(parse_log_level("  ").is_err());
        assert_eq!(parse_log_format("json").ok(), Some(LogFormat::Json));
        assert!(parse_log_format("yaml").is_err());
    }

    #[test]
    fn asset_base_gets_trailing_slash() {
        assert_eq!(normalize_asset_base("/static").ok().as_deref(), Some("/static/"));
        assert_eq!(
            normalize_asset_base("https://cdn.martspec.com/").ok().as_deref(),
            Some("https://cdn.martspec.com/")
        );
        assert!(normalize_asset_base("static").is_err());
    }
}
