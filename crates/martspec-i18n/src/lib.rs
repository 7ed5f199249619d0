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

//! Translation lookup and active-locale management for the Martspec site.
//!
//! Layout: `locale.rs` (supported locales and language negotiation),
//! `bundle.rs` (JSON-backed translation bundles), `resolver.rs` (`Locale`,
//! the active-language resolver that announces switches on the event bus),
//! `error.rs`.

pub mod bundle;
pub mod error;
pub mod locale;
pub mod resolver;

pub use bundle::TranslationBundle;
pub use error::{I18nError, I18nResult};
pub use locale::{DEFAULT_LOCALE, LocaleCode, parse_accept_language};
pub use resolver::Locale;
