use std::fs;

use martspec_config::defaults::{ENV_DEFAULT_LOCALE, ENV_LOG_FORMAT};
use martspec_config::{ConfigError, SiteConfig};
use martspec_i18n::LocaleCode;
use martspec_telemetry::LogFormat;
use serde_json::json;

#[test]
fn environment_overrides_file_which_overrides_defaults() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("site.json");
    fs::write(
        &path,
        serde_json::to_vec(&json!({
            "default_locale": "de",
            "preferred_languages": ["es", "en"],
            "log_format": "pretty"
        }))?,
    )?;

    let config = SiteConfig::load_with(Some(&path), |name| match name {
        ENV_DEFAULT_LOCALE => Some("fr".to_string()),
        ENV_LOG_FORMAT => Some("json".to_string()),
        _ => None,
    })?;

    assert_eq!(config.default_locale, LocaleCode::Fr);
    assert_eq!(config.preferred_languages, vec!["es", "en"]);
    assert_eq!(config.log_format, LogFormat::Json);
    Ok(())
}

#[test]
fn unknown_fields_in_file_are_rejected() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("site.json");
    fs::write(&path, r#"{"default_locale": "en", "theme": "dark"}"#)?;

    let err = SiteConfig::from_json_file(&path).expect_err("theme is not a setting");
    assert!(matches!(err, ConfigError::Parse { .. }));
    Ok(())
}

#[test]
fn missing_file_reports_path() {
    let err = SiteConfig::from_json_file(std::path::Path::new("/nonexistent/martspec.json"))
        .expect_err("file does not exist");
    match err {
        ConfigError::Io { path, .. } => assert!(path.ends_with("martspec.json")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn lookup_without_variables_yields_defaults() -> anyhow::Result<()> {
    let config = SiteConfig::from_lookup(|_| None)?;
    assert_eq!(config, SiteConfig::default());
    Ok(())
}
