#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Binary entrypoint for the `martspec` command.

use std::process;

/// Run the CLI and exit with its status code.
#[tokio::main]
async fn main() {
    let code = martspec_cli::run().await;
    process::exit(code);
}
