//! Shared HTTP client and error types for the CLI.

use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use anyhow::anyhow;
use martspec_app::AppError;
use martspec_config::ConfigError;
use martspec_i18n::I18nError;
use martspec_site::{SiteError, available_pages};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use url::Url;

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidField {
                field,
                value,
                reason,
            } => Self::validation(format!("invalid {field} '{value}': {reason}")),
            other => Self::failure(anyhow::Error::new(other).context("failed to load configuration")),
        }
    }
}

impl From<AppError> for CliError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Site {
                source: SiteError::UnknownPage { slug },
                ..
            } => {
                let known: Vec<_> = available_pages().iter().map(|page| page.slug()).collect();
                Self::validation(format!(
                    "unknown page '{slug}' (available: {})",
                    known.join(", ")
                ))
            }
            AppError::Locale {
                source: I18nError::UnsupportedLocale { tag },
                ..
            } => Self::validation(format!("unsupported language '{tag}'")),
            other => Self::failure(other),
        }
    }
}

/// Dependencies for commands that talk to the network.
#[derive(Clone)]
pub(crate) struct CliDependencies {
    pub(crate) client: Client,
}

impl CliDependencies {
    /// HTTP client tagging every request with `trace_id`.
    pub(crate) fn new(timeout_secs: u64, trace_id: &str) -> CliResult<Self> {
        let mut default_headers = HeaderMap::new();
        let request_id = HeaderValue::from_str(trace_id).map_err(|_| {
            CliError::failure(anyhow!("trace identifier contains invalid characters"))
        })?;
        default_headers.insert(HEADER_REQUEST_ID, request_id);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|err| CliError::failure(anyhow!("failed to build HTTP client: {err}")))?;

        Ok(Self { client })
    }
}

/// Parse a URL argument.
pub(crate) fn parse_url(input: &str) -> Result<Url, String> {
    input
        .parse::<Url>()
        .map_err(|err| format!("invalid URL '{input}': {err}"))
}
