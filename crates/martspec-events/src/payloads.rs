//! Event payload types carried across the site.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::topics::LANG_CHANGED;

/// Typed events delivered to subscribers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// The active locale finished switching and its tables are loaded.
    LanguageChanged {
        /// Locale code now active (for example `fr`).
        code: String,
    },
    /// Free-form event for channels without a dedicated variant.
    Custom {
        /// Channel the event belongs to.
        channel: String,
        /// Arbitrary JSON payload.
        payload: Value,
    },
}

impl Event {
    /// Build a [`Event::LanguageChanged`] for the given code.
    #[must_use]
    pub fn language_changed(code: impl Into<String>) -> Self {
        Self::LanguageChanged { code: code.into() }
    }

    /// Canonical channel name for the event.
    #[must_use]
    pub fn channel(&self) -> &str {
        match self {
            Self::LanguageChanged { .. } => LANG_CHANGED,
            Self::Custom { channel, .. } => channel,
        }
    }

    /// Machine-friendly discriminator used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::LanguageChanged { .. } => "language_changed",
            Self::Custom { .. } => "custom",
        }
    }

    /// Locale code carried by a language change, if any.
    #[must_use]
    pub fn language_code(&self) -> Option<&str> {
        match self {
            Self::LanguageChanged { code } => Some(code),
            Self::Custom { .. } => None,
        }
    }
}
