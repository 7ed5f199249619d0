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

//! Martspec site composition root.
//!
//! Layout: `bootstrap.rs` (startup order and the running application),
//! `target.rs` (render target shared with the re-render subscriber), `error.rs`.

/// Application bootstrap.
pub mod bootstrap;
/// Application error types.
pub mod error;
/// Render target.
pub mod target;

pub use bootstrap::{Application, run_app};
pub use error::{AppError, AppResult};
pub use target::RenderTarget;
