//! Argument parsing and command dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use martspec_config::SiteConfig;
use martspec_config::validate::{parse_log_format, parse_log_level};
use martspec_telemetry::{GlobalContextGuard, LoggingConfig};
use tracing::debug;
use url::Url;
use uuid::Uuid;

use crate::client::{CliError, CliResult, parse_url};
use crate::commands::languages::handle_languages;
use crate::commands::render::handle_render;
use crate::commands::sitemap::handle_check_sitemap;

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub(crate) const DEFAULT_REPORT_PATH: &str = "results.txt";

/// Parses CLI arguments, executes the requested command and reports errors.
/// Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    let trace_id = Uuid::new_v4().to_string();

    match execute(cli, &trace_id).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

async fn execute(cli: Cli, trace_id: &str) -> CliResult<()> {
    let config = resolve_config(&cli)?;
    let logging = LoggingConfig {
        level: &config.log_level,
        format: config.log_format,
        ..LoggingConfig::default()
    };
    martspec_telemetry::init_logging(&logging)
        .map_err(|err| CliError::failure(anyhow::Error::new(err).context("logging init")))?;
    let _context = GlobalContextGuard::new(command_label(&cli.command));
    debug!(trace_id, "dispatching command");

    dispatch(cli.command, &config, trace_id).await
}

pub(crate) async fn dispatch(command: Command, config: &SiteConfig, trace_id: &str) -> CliResult<()> {
    match command {
        Command::Render(args) => handle_render(config, &args),
        Command::Languages => {
            handle_languages();
            Ok(())
        }
        Command::CheckSitemap(args) => handle_check_sitemap(config, args, trace_id).await,
    }
}

/// Load settings and apply the global logging flags on top.
fn resolve_config(cli: &Cli) -> CliResult<SiteConfig> {
    let mut config = SiteConfig::load(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.log_level = parse_log_level(level)?;
    }
    if let Some(format) = &cli.log_format {
        config.log_format = parse_log_format(format)?;
    }
    Ok(config)
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Render(_) => "render",
        Command::Languages => "languages",
        Command::CheckSitemap(_) => "check-sitemap",
    }
}

#[derive(Parser)]
#[command(name = "martspec", about = "Tooling for the Martspec marketing site")]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "MARTSPEC_CONFIG",
        help = "JSON settings file applied before the environment"
    )]
    pub(crate) config: Option<PathBuf>,
    #[arg(long, global = true, help = "Log level or tracing filter directive")]
    pub(crate) log_level: Option<String>,
    #[arg(long, global = true, help = "Log output format (json or pretty)")]
    pub(crate) log_format: Option<String>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Render a page in the requested language.
    Render(RenderArgs),
    /// List supported languages.
    Languages,
    /// Check every URL listed in the sitemap.
    CheckSitemap(SitemapArgs),
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    #[arg(long, default_value = "emotion", help = "Page slug")]
    pub(crate) page: String,
    #[arg(long, help = "Language tag; overrides the configured preferences")]
    pub(crate) lang: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args)]
pub(crate) struct SitemapArgs {
    #[arg(long, value_parser = parse_url, help = "Sitemap URL; defaults to the configured one")]
    pub(crate) url: Option<Url>,
    #[arg(long, default_value = DEFAULT_REPORT_PATH, help = "Report file")]
    pub(crate) output: PathBuf,
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, help = "Per-request timeout in seconds")]
    pub(crate) timeout: u64,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}
