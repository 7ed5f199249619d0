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

//! Binary entrypoint that boots the site from the environment and prints the
//! rendered landing page.

use martspec_app::{AppResult, run_app};

/// Boot the application and print the initial render.
fn main() -> AppResult<()> {
    run_app()
}
