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

//! Marketing page content for the Martspec site.
//!
//! Components are stateless: their props are translation keys, asset paths and
//! colours, and every render reads strings from the active [`Locale`], so a
//! re-render after a language switch picks up the new language.
//!
//! Layout: `render.rs` (output blocks and the render context), `components/`
//! (cards, lists, calls to action, reviews, pills), `pages/` (the `Page` trait
//! and page registry), `error.rs`.
//!
//! [`Locale`]: martspec_i18n::Locale

pub mod components;
pub mod error;
pub mod pages;
pub mod render;

pub use error::{SiteError, SiteResult};
pub use pages::{Page, available_pages, page_by_slug};
pub use render::{
    Block, Component, IconEntry, Image, Link, LinkStyle, RenderContext, RenderedPage, SiteContext,
};
