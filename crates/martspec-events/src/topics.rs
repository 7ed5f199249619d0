//! Well-known channel names.

/// Channel notified once per completed language switch. The payload is an
/// [`Event::LanguageChanged`](crate::Event::LanguageChanged) carrying the new
/// locale code.
pub const LANG_CHANGED: &str = "LANG_CHANGED";
