//! Supported locales and browser-style language negotiation.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Locales the site ships translations for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    /// English.
    En,
    /// Russian.
    Ru,
    /// German.
    De,
    /// Spanish.
    Es,
    /// French.
    Fr,
    /// Arabic.
    Ar,
}

impl LocaleCode {
    /// All supported locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [Self::En, Self::Ru, Self::De, Self::Es, Self::Fr, Self::Ar]
    }

    /// Two-letter code used in links, asset names and events.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Ar => "ar",
        }
    }

    /// Native name for language pickers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Русский",
            Self::De => "Deutsch",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::Ar => "العربية",
        }
    }

    /// App Store storefront country used for this locale's links.
    #[must_use]
    pub const fn country(self) -> &'static str {
        match self {
            Self::En => "us",
            Self::Ru => "ru",
            Self::De => "de",
            Self::Es => "es",
            Self::Fr => "fr",
            Self::Ar => "ae",
        }
    }

    /// Map a language tag (`fr`, `fr-CA`, `FR_ca`) to a supported locale.
    #[must_use]
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let lowered = tag.trim().to_ascii_lowercase();
        let base = lowered.split(['-', '_']).next().unwrap_or_default();
        Self::all().into_iter().find(|locale| locale.code() == base)
    }
}

impl Display for LocaleCode {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.code())
    }
}

/// Fallback locale used when nothing better matches.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::En;

/// Pick the first supported locale from an `Accept-Language` style list.
///
/// Entries keep their listed order; quality weights are ignored apart from
/// `q=0`, which marks a language as unacceptable.
#[must_use]
pub fn parse_accept_language(value: &str) -> Option<LocaleCode> {
    value.split(',').find_map(|part| {
        let mut components = part.trim().split(';');
        let tag = components.next()?.trim();
        if tag.is_empty() {
            return None;
        }
        let rejected = components.any(|param| {
            param
                .trim()
                .strip_prefix("q=")
                .and_then(|weight| weight.trim().parse::<f32>().ok())
                .is_some_and(|weight| weight <= 0.0)
        });
        if rejected {
            return None;
        }
        LocaleCode::from_lang_tag(tag)
    })
}
