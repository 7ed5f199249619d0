//! # Design
//!
//! - Centralize application-level errors for bootstrap.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: martspec_config::ConfigError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: martspec_telemetry::TelemetryError,
    },
    /// Locale initialisation or switching failed.
    #[error("locale operation failed")]
    Locale {
        /// Operation identifier.
        operation: &'static str,
        /// Source i18n error.
        source: martspec_i18n::I18nError,
    },
    /// Page lookup failed.
    #[error("site operation failed")]
    Site {
        /// Operation identifier.
        operation: &'static str,
        /// Source site error.
        source: martspec_site::SiteError,
    },
    /// Required runtime state was missing.
    #[error("missing state")]
    MissingState {
        /// State field that was missing.
        field: &'static str,
    },
}

impl AppError {
    pub(crate) const fn config(
        operation: &'static str,
        source: martspec_config::ConfigError,
    ) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: martspec_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }

    pub(crate) const fn locale(operation: &'static str, source: martspec_i18n::I18nError) -> Self {
        Self::Locale { operation, source }
    }

    pub(crate) const fn site(operation: &'static str, source: martspec_site::SiteError) -> Self {
        Self::Site { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn app_error_helpers_build_variants() {
        let config = AppError::config(
            "load",
            martspec_config::ConfigError::InvalidField {
                field: "app_id",
                value: "abc".to_string(),
                reason: "not_a_number",
            },
        );
        assert!(matches!(config, AppError::Config { operation: "load", .. }));
        assert_eq!(config.to_string(), "configuration operation failed");
        assert!(config.source().is_some());

        let locale = AppError::locale(
            "locale.change_language",
            martspec_i18n::I18nError::UnsupportedLocale {
                tag: "xx".to_string(),
            },
        );
        assert!(matches!(locale, AppError::Locale { .. }));

        let site = AppError::site(
            "page_by_slug",
            martspec_site::SiteError::UnknownPage {
                slug: "nope".to_string(),
            },
        );
        assert!(matches!(site, AppError::Site { .. }));
    }
}
