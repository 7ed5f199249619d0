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

//! Named-channel event bus shared by the Martspec site components.
//!
//! The bus maps channel names to ordered subscriber lists. Publishing invokes
//! every subscriber of a channel synchronously, in registration order, over a
//! snapshot of the list taken when the publish starts. There is no global
//! instance: the application's composition root constructs one `EventBus` and
//! hands clones of it to whoever needs to publish or subscribe.
//!
//! Layout: `payloads.rs` (typed events), `topics.rs` (well-known channel
//! names), `routing.rs` (`EventBus` registry and `Subscriber` handles),
//! `error.rs` (publish failures).

pub mod error;
pub mod payloads;
pub mod routing;
pub mod topics;

pub use error::{EventBusError, EventBusResult, HandlerError, HandlerResult};
pub use payloads::Event;
pub use routing::{EventBus, Subscriber};
pub use topics::LANG_CHANGED;
