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

//! Site settings loaded from defaults, an optional JSON file and the
//! environment, in that order of precedence (later wins).
//!
//! Layout: `defaults.rs` (default values and variable names), `model.rs`
//! (`SiteConfig` and `ConfigLayer`), `validate.rs` (field parsing),
//! `loader.rs` (file and environment sources), `error.rs`.

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::{ConfigLayer, SiteConfig};
