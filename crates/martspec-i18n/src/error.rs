//! # Design
//!
//! - Unsupported language tags are rejected before any state changes.
//! - Notification failures keep the bus error as the source; the locale switch
//!   itself has already completed when they are reported.

use martspec_events::EventBusError;
use thiserror::Error;

use crate::locale::LocaleCode;

/// Result alias for locale operations.
pub type I18nResult<T> = Result<T, I18nError>;

/// Errors raised by the locale resolver.
#[derive(Debug, Error)]
pub enum I18nError {
    /// The requested language tag does not map to a supported locale.
    #[error("unsupported locale")]
    UnsupportedLocale {
        /// Tag supplied by the caller.
        tag: String,
    },
    /// A `LANG_CHANGED` subscriber failed while being notified.
    #[error("language change notification failed")]
    Notify {
        /// Locale that became active.
        locale: LocaleCode,
        /// Failure reported by the event bus.
        source: EventBusError,
    },
}
