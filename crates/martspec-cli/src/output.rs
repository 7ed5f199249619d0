//! Output renderers and formatting helpers for CLI commands.

use std::fmt::Write as _;

use anyhow::anyhow;
use martspec_site::RenderedPage;

use crate::cli::OutputFormat;
use crate::client::{CliError, CliResult};
use crate::commands::sitemap::{LinkOutcome, LinkStatus};

/// One line of the `languages` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LanguageRow {
    pub(crate) code: &'static str,
    pub(crate) label: &'static str,
    pub(crate) rtl: bool,
}

pub(crate) fn format_page(page: &RenderedPage, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Text => Ok(page.to_string()),
        OutputFormat::Json => {
            let text = page
                .to_json()
                .map_err(|err| CliError::failure(anyhow!("failed to format JSON: {err:#}")))?;
            Ok(format!("{text}\n"))
        }
    }
}

pub(crate) fn format_languages(rows: &[LanguageRow]) -> String {
    let mut out = format!("{:<6} LANGUAGE\n", "CODE");
    for row in rows {
        let direction = if row.rtl { " (rtl)" } else { "" };
        let _ = writeln!(out, "{:<6} {}{direction}", row.code, row.label);
    }
    out
}

pub(crate) fn format_report(results: &[LinkStatus]) -> String {
    results.iter().fold(String::new(), |mut out, result| {
        let _ = match &result.outcome {
            LinkOutcome::Status(code) => {
                writeln!(out, "URL: {}, Status Code: {code}", result.url)
            }
            LinkOutcome::Error => writeln!(out, "URL: {}, Status Code: error", result.url),
        };
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lines_match_link_checker_format() {
        let report = format_report(&[
            LinkStatus {
                url: "https://martspec.com/".to_string(),
                outcome: LinkOutcome::Status(200),
            },
            LinkStatus {
                url: "https://martspec.com/gone".to_string(),
                outcome: LinkOutcome::Error,
            },
        ]);
        assert_eq!(
            report,
            "URL: https://martspec.com/, Status Code: 200\n\
             URL: https://martspec.com/gone, Status Code: error\n"
        );
    }

    #[test]
    fn language_table_marks_rtl() {
        let table = format_languages(&[
            LanguageRow {
                code: "en",
                label: "English",
                rtl: false,
            },
            LanguageRow {
                code: "ar",
                label: "العربية",
                rtl: true,
            },
        ]);
        assert_eq!(table, "CODE   LANGUAGE\nen     English\nar     العربية (rtl)\n");
    }

    #[test]
    fn json_page_output_ends_with_newline() {
        let page = RenderedPage {
            slug: "emotion".into(),
            locale: "en".into(),
            rtl: false,
            title: "Title".into(),
            blocks: Vec::new(),
        };
        let json = format_page(&page, OutputFormat::Json).expect("json");
        assert!(json.ends_with("}\n"));
        assert_eq!(
            format_page(&page, OutputFormat::Text).expect("text"),
            "[en] Title\n"
        );
    }
}
