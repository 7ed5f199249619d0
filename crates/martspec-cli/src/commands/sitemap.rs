use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::anyhow;
use martspec_config::SiteConfig;
use regex::Regex;
use reqwest::Client;
use tracing::{info, warn};
use url::Url;

use crate::cli::SitemapArgs;
use crate::client::{CliDependencies, CliError, CliResult};
use crate::output::format_report;

/// Matches `<loc>` elements, namespaced or not.
static LOC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(?:[A-Za-z][\w.-]*:)?loc\s*>\s*(.*?)\s*</(?:[A-Za-z][\w.-]*:)?loc\s*>")
        .unwrap_or_else(|err| unreachable!("location pattern is valid: {err}"))
});

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Result of probing one sitemap URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LinkOutcome {
    Status(u16),
    /// The request failed before a status line arrived.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LinkStatus {
    pub(crate) url: String,
    pub(crate) outcome: LinkOutcome,
}

pub(crate) async fn handle_check_sitemap(
    config: &SiteConfig,
    args: SitemapArgs,
    trace_id: &str,
) -> CliResult<()> {
    let deps = CliDependencies::new(args.timeout, trace_id)?;
    let sitemap = args.url.unwrap_or_else(|| config.sitemap_url.clone());
    let results = check_sitemap(&deps.client, &sitemap).await?;
    write_report(&args.output, &results)?;
    println!("Link check results saved to {}", args.output.display());
    Ok(())
}

/// Fetch the sitemap and issue a HEAD request for every listed URL, in order.
pub(crate) async fn check_sitemap(client: &Client, sitemap: &Url) -> CliResult<Vec<LinkStatus>> {
    let response = client
        .get(sitemap.clone())
        .send()
        .await
        .map_err(|err| CliError::failure(anyhow!("failed to fetch sitemap {sitemap}: {err}")))?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::failure(anyhow!(
            "sitemap request returned status {status}"
        )));
    }
    let body = response
        .text()
        .await
        .map_err(|err| CliError::failure(anyhow!("failed to read sitemap body: {err}")))?;

    let urls = extract_locations(&body);
    info!(count = urls.len(), sitemap = %sitemap, "checking sitemap links");

    let mut results = Vec::with_capacity(urls.len());
    for url in urls {
        let outcome = match client.head(&url).send().await {
            Ok(response) => LinkOutcome::Status(response.status().as_u16()),
            Err(err) => {
                warn!(url = %url, error = %err, "link check failed");
                LinkOutcome::Error
            }
        };
        results.push(LinkStatus { url, outcome });
    }
    Ok(results)
}

/// Every `<loc>` value in document order; repeated URLs are kept once.
pub(crate) fn extract_locations(xml: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for captures in LOC_PATTERN.captures_iter(xml) {
        let url = xml_text(&captures[1]).trim().to_string();
        if !url.is_empty() && seen.insert(url.clone()) {
            urls.push(url);
        }
    }
    urls
}

/// Character data of an element: CDATA sections are copied verbatim, entity
/// and character references elsewhere are decoded.
fn xml_text(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find(['&', '<']) {
        text.push_str(&rest[..start]);
        rest = &rest[start..];
        if let Some(section) = rest.strip_prefix(CDATA_OPEN) {
            let end = section.find(CDATA_CLOSE).unwrap_or(section.len());
            text.push_str(&section[..end]);
            rest = section.get(end + CDATA_CLOSE.len()..).unwrap_or_default();
        } else if let Some((decoded, consumed)) = decode_reference(rest) {
            text.push(decoded);
            rest = &rest[consumed..];
        } else {
            text.push_str(&rest[..1]);
            rest = &rest[1..];
        }
    }
    text.push_str(rest);
    text
}

/// Decode the reference at the start of `input`, returning the character and
/// the number of bytes consumed. Unknown or malformed references yield `None`.
fn decode_reference(input: &str) -> Option<(char, usize)> {
    let end = input.find(';')?;
    let name = input.get(1..end)?;
    let decoded = match name {
        "lt" => '<',
        "gt" => '>',
        "amp" => '&',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)?
        }
    };
    Some((decoded, end + 1))
}

fn write_report(path: &Path, results: &[LinkStatus]) -> CliResult<()> {
    fs::write(path, format_report(results)).map_err(|err| {
        CliError::failure(anyhow!("failed to write report {}: {err}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use httpmock::Method::HEAD;

    fn sitemap_xml(urls: &[String]) -> String {
        let entries: String = urls
            .iter()
            .map(|url| format!("  <url>\n    <loc>{url}</loc>\n  </url>\n"))
            .collect();
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{entries}</urlset>\n"
        )
    }

    #[test]
    fn locations_keep_document_order_and_unescape_entities() {
        let xml = "<urlset><url><loc> https://a.test/?x=1&amp;y=2 </loc></url>\
                   <url><sm:loc>https://b.test/</sm:loc></url>\
                   <url><loc>https://a.test/?x=1&amp;y=2</loc></url></urlset>";
        let urls = extract_locations(xml);
        assert_eq!(urls, vec!["https://a.test/?x=1&y=2", "https://b.test/"]);
    }

    #[test]
    fn cdata_locations_are_taken_verbatim() {
        let xml = "<urlset><url><loc><![CDATA[https://a.test/x]]></loc></url>\
                   <url><loc> <![CDATA[https://a.test/?q=1&amp;r=2]]> </loc></url></urlset>";
        assert_eq!(
            extract_locations(xml),
            vec!["https://a.test/x", "https://a.test/?q=1&amp;r=2"]
        );
    }

    #[test]
    fn numeric_character_references_are_decoded() {
        let xml = "<urlset><url><loc>https://b.test/?a=1&#38;b=2</loc></url>\
                   <url><loc>https://b.test/caf&#xE9;&#x2F;menu</loc></url>\
                   <url><loc>https://b.test/?a=1&b=2</loc></url>\
                   <url><loc>https://b.test/&#xZZ;</loc></url></urlset>";
        assert_eq!(
            extract_locations(xml),
            vec![
                "https://b.test/?a=1&b=2",
                "https://b.test/café/menu",
                "https://b.test/&#xZZ;",
            ]
        );
    }

    #[tokio::test]
    async fn statuses_are_recorded_per_url() -> Result<()> {
        let server = MockServer::start_async().await;
        let urls = vec![
            server.url("/emotion"),
            server.url("/missing"),
            "http://127.0.0.1:9/unreachable".to_string(),
        ];
        let sitemap = server.mock(|when, then| {
            when.method(GET).path("/sitemap.xml");
            then.status(200)
                .header("content-type", "application/xml")
                .body(sitemap_xml(&urls));
        });
        let ok = server.mock(|when, then| {
            when.method(HEAD).path("/emotion");
            then.status(200);
        });
        let missing = server.mock(|when, then| {
            when.method(HEAD).path("/missing");
            then.status(404);
        });

        let deps = CliDependencies::new(5, "trace").map_err(|err| anyhow!("{err:?}"))?;
        let sitemap_url: Url = server.url("/sitemap.xml").parse()?;
        let results = check_sitemap(&deps.client, &sitemap_url)
            .await
            .map_err(|err| anyhow!("{err:?}"))?;

        sitemap.assert();
        ok.assert();
        missing.assert();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].outcome, LinkOutcome::Status(200));
        assert_eq!(results[1].outcome, LinkOutcome::Status(404));
        assert_eq!(results[2].outcome, LinkOutcome::Error);
        Ok(())
    }

    #[tokio::test]
    async fn handler_writes_report_file() -> Result<()> {
        let server = MockServer::start_async().await;
        let page = server.url("/");
        server.mock(|when, then| {
            when.method(GET).path("/sitemap.xml");
            then.status(200).body(sitemap_xml(std::slice::from_ref(&page)));
        });
        server.mock(|when, then| {
            when.method(HEAD).path("/");
            then.status(301);
        });

        let dir = tempfile::tempdir()?;
        let output = dir.path().join("results.txt");
        let args = SitemapArgs {
            url: Some(server.url("/sitemap.xml").parse()?),
            output: output.clone(),
            timeout: 5,
        };

        handle_check_sitemap(&SiteConfig::default(), args, "trace")
            .await
            .map_err(|err| anyhow!("{err:?}"))?;

        assert_eq!(
            fs::read_to_string(&output)?,
            format!("URL: {page}, Status Code: 301\n")
        );
        Ok(())
    }

    #[tokio::test]
    async fn failing_sitemap_fetch_is_an_error() -> Result<()> {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/sitemap.xml");
            then.status(503);
        });
        let deps = CliDependencies::new(5, "trace").map_err(|err| anyhow!("{err:?}"))?;
        let sitemap_url: Url = server.url("/sitemap.xml").parse()?;

        let err = check_sitemap(&deps.client, &sitemap_url)
            .await
            .expect_err("503 sitemap");

        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("503"));
        Ok(())
    }
}
