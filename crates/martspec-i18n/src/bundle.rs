//! Lightweight JSON-backed translations with per-locale bundles.

use std::sync::LazyLock;

use serde_json::Value;
use tracing::error;

use crate::locale::LocaleCode;

/// Translation bundle containing the parsed JSON tree for one locale.
#[derive(Clone, Debug)]
pub struct TranslationBundle {
    locale: LocaleCode,
    tree: Value,
    rtl: bool,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Load the embedded bundle for `locale`.
    ///
    /// A bundle that fails to parse is logged once and behaves as empty, so
    /// every lookup falls through to English.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        let tree = match serde_json::from_str::<Value>(raw_locale(locale)) {
            Ok(tree) => tree,
            Err(err) => {
                error!(
                    error = %err,
                    locale = locale.code(),
                    "failed to parse translation bundle"
                );
                Value::Null
            }
        };
        let rtl = tree
            .get("meta")
            .and_then(|meta| meta.get("rtl"))
            .and_then(Value::as_bool)
            .unwrap_or(false);
        Self { locale, tree, rtl }
    }

    /// Resolve a dotted key (`EMOTION.LIST1.LI1_HEAD`).
    ///
    /// Missing keys fall back to English, then to the key itself.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| key.to_string())
    }

    /// Resolve a dotted key with English fallback and a caller default.
    #[must_use]
    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.lookup(key).unwrap_or_else(|| default.to_string())
    }

    /// Whether this bundle's own tree carries `key`, ignoring fallbacks.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        resolve(&self.tree, key).is_some()
    }

    /// Locale backing this bundle.
    #[must_use]
    pub const fn locale(&self) -> LocaleCode {
        self.locale
    }

    /// Whether the locale prefers right-to-left layout.
    #[must_use]
    pub const fn rtl(&self) -> bool {
        self.rtl
    }

    fn lookup(&self, key: &str) -> Option<String> {
        resolve(&self.tree, key).or_else(|| {
            if self.locale == LocaleCode::En {
                None
            } else {
                resolve(&EN_FALLBACK.tree, key)
            }
        })
    }
}

static EN_FALLBACK: LazyLock<TranslationBundle> =
    LazyLock::new(|| TranslationBundle::new(LocaleCode::En));

fn resolve(tree: &Value, key: &str) -> Option<String> {
    if let Some(direct) = tree.get(key).and_then(Value::as_str) {
        return Some(direct.to_string());
    }
    let mut node = tree;
    for segment in key.split('.') {
        node = node.get(segment)?;
    }
    node.as_str().map(ToString::to_string)
}

const fn raw_locale(locale: LocaleCode) -> &'static str {
    match locale {
        LocaleCode::En => include_str!("../i18n/en.json"),
        LocaleCode::Ru => include_str!("../i18n/ru.json"),
        LocaleCode::De => include_str!("../i18n/de.json"),
        LocaleCode::Es => include_str!("../i18n/es.json"),
        LocaleCode::Fr => include_str!("../i18n/fr.json"),
        LocaleCode::Ar => include_str!("../i18n/ar.json"),
    }
}
