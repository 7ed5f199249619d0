//! Default values and environment variable names.

/// Sitemap checked when none is configured.
pub const DEFAULT_SITEMAP_URL: &str = "https://martspec.com/sitemap.xml";
/// Prefix applied to asset paths when none is configured.
pub const DEFAULT_ASSET_BASE: &str = "/";

/// Environment variable selecting the fallback locale.
pub const ENV_DEFAULT_LOCALE: &str = "MARTSPEC_DEFAULT_LOCALE";
/// Environment variable listing preferred languages, comma separated.
pub const ENV_LANGUAGES: &str = "MARTSPEC_LANGUAGES";
/// Environment variable carrying the App Store application id.
pub const ENV_APP_ID: &str = "MARTSPEC_APP_ID";
/// Environment variable overriding the asset base path.
pub const ENV_ASSET_BASE: &str = "MARTSPEC_ASSET_BASE";
/// Environment variable overriding the sitemap location.
pub const ENV_SITEMAP_URL: &str = "MARTSPEC_SITEMAP_URL";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "MARTSPEC_LOG_LEVEL";
/// Environment variable selecting `json` or `pretty` logs.
pub const ENV_LOG_FORMAT: &str = "MARTSPEC_LOG_FORMAT";
