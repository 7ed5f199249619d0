//! Active-language resolver.
//!
//! # Design
//! - One `Locale` per application, shared behind an `Arc`.
//! - A switch replaces the active bundle first and only then publishes
//!   `LANG_CHANGED`, so subscribers that read strings see the new language.
//! - The bundle lock is released before publishing; subscribers may read from
//!   the resolver.
//! - Switches are serialized by a separate lock held from the "already
//!   active" check through the publish, so the last announced code is always
//!   the active one. A subscriber that calls [`Locale::change_language`] or
//!   [`Locale::init`] on the resolver that notified it blocks forever.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard};

use martspec_events::{Event, EventBus};
use tracing::{debug, info};

use crate::bundle::TranslationBundle;
use crate::error::{I18nError, I18nResult};
use crate::locale::{LocaleCode, parse_accept_language};

/// Marker embedded in asset file names that have per-locale variants.
const ASSET_LOCALE_MARKER: &str = "-en.";

/// Resolves translation keys for the active locale and announces switches.
#[derive(Debug)]
pub struct Locale {
    bus: EventBus,
    default: LocaleCode,
    active: RwLock<Arc<TranslationBundle>>,
    switching: Mutex<()>,
}

impl Locale {
    /// Build a resolver with `default` loaded. Nothing is published until
    /// [`Locale::init`] runs.
    #[must_use]
    pub fn new(bus: EventBus, default: LocaleCode) -> Self {
        Self {
            bus,
            default,
            active: RwLock::new(Arc::new(TranslationBundle::new(default))),
            switching: Mutex::new(()),
        }
    }

    /// Select the starting locale and announce it.
    ///
    /// `preferred` holds language tags in priority order, each optionally
    /// carrying `;q=` weights. The first supported one wins; otherwise the
    /// default locale is used. Always publishes exactly one `LANG_CHANGED`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Notify`] when a subscriber fails.
    pub fn init<I, S>(&self, preferred: I) -> I18nResult<LocaleCode>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected = preferred
            .into_iter()
            .find_map(|tag| parse_accept_language(tag.as_ref()))
            .unwrap_or(self.default);
        debug!(locale = selected.code(), "initialising locale");
        let switching = self.lock_switch();
        self.switch_to(selected, &switching)?;
        Ok(selected)
    }

    /// Switch the active language to `tag`.
    ///
    /// Selecting the locale that is already active changes nothing and
    /// publishes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnsupportedLocale`] for unknown tags, leaving the
    /// active locale untouched. Returns [`I18nError::Notify`] when a subscriber
    /// fails; the switch has completed by then.
    pub fn change_language(&self, tag: &str) -> I18nResult<LocaleCode> {
        let locale =
            LocaleCode::from_lang_tag(tag).ok_or_else(|| I18nError::UnsupportedLocale {
                tag: tag.to_string(),
            })?;
        let switching = self.lock_switch();
        if locale == self.current() {
            debug!(locale = locale.code(), "locale already active");
            return Ok(locale);
        }
        self.switch_to(locale, &switching)?;
        Ok(locale)
    }

    /// Locale whose tables are currently loaded.
    #[must_use]
    pub fn current(&self) -> LocaleCode {
        self.read_active().locale()
    }

    /// Locale used when negotiation finds nothing supported.
    #[must_use]
    pub const fn default_locale(&self) -> LocaleCode {
        self.default
    }

    /// Bundle currently in use.
    #[must_use]
    pub fn bundle(&self) -> Arc<TranslationBundle> {
        let active = self.read_active();
        Arc::clone(&active)
    }

    /// Localized text for `key`, falling back to English and then the key.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.read_active().text(key)
    }

    /// Localized text for `key`, falling back to English and then `default`.
    #[must_use]
    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.read_active().text_or(key, default)
    }

    /// Whether the active locale is right-to-left.
    #[must_use]
    pub fn is_rtl(&self) -> bool {
        self.read_active().rtl()
    }

    /// Rewrite a localized asset path for the active locale.
    ///
    /// Paths carrying the English marker (`hero-en.webp`) are pointed at the
    /// active locale's variant (`hero-fr.webp`); other paths are unchanged.
    #[must_use]
    pub fn localized_asset(&self, src: &str) -> String {
        let locale = self.current();
        if locale == LocaleCode::En {
            return src.to_string();
        }
        src.rfind(ASSET_LOCALE_MARKER).map_or_else(
            || src.to_string(),
            |index| {
                format!(
                    "{}-{}.{}",
                    &src[..index],
                    locale.code(),
                    &src[index + ASSET_LOCALE_MARKER.len()..]
                )
            },
        )
    }

    /// Site-relative link for `path` in the active locale.
    ///
    /// The default locale lives at the root; other locales are prefixed with
    /// their code (`/fr/emotion/color-test`).
    #[must_use]
    pub fn localized_link(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        let locale = self.current();
        if locale == self.default {
            format!("/{path}")
        } else {
            format!("/{}/{path}", locale.code())
        }
    }

    /// Bus used to announce language switches.
    #[must_use]
    pub const fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Runs under the switch lock, which stays held through the publish.
    fn switch_to(&self, locale: LocaleCode, _switching: &MutexGuard<'_, ()>) -> I18nResult<()> {
        let bundle = Arc::new(TranslationBundle::new(locale));
        {
            let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
            *active = bundle;
        }
        info!(locale = locale.code(), "active locale changed");
        self.bus
            .emit(&Event::language_changed(locale.code()))
            .map_err(|source| I18nError::Notify { locale, source })?;
        Ok(())
    }

    fn lock_switch(&self) -> MutexGuard<'_, ()> {
        self.switching.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_active(&self) -> RwLockReadGuard<'_, Arc<TranslationBundle>> {
        self.active.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use martspec_events::{LANG_CHANGED, Subscriber};
    use std::sync::Mutex;

    #[test]
    fn init_negotiates_preferred_tags() {
        let locale = Locale::new(EventBus::new(), LocaleCode::En);
        let selected = locale.init(["pt-BR", "ru-RU;q=0.8"]).expect("init");
        assert_eq!(selected, LocaleCode::Ru);
        assert_eq!(locale.current(), LocaleCode::Ru);
    }

    #[test]
    fn init_without_supported_tags_uses_default() {
        let locale = Locale::new(EventBus::new(), LocaleCode::Fr);
        let selected = locale.init(Vec::<String>::new()).expect("init");
        assert_eq!(selected, LocaleCode::Fr);
        assert_eq!(locale.text("EMOTION.HEAD"), "Comprenez vos émotions");
    }

    #[test]
    fn subscribers_observe_updated_tables() {
        let bus = EventBus::new();
        let locale = Arc::new(Locale::new(bus.clone(), LocaleCode::En));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let observer = {
            let locale = Arc::clone(&locale);
            let seen = Arc::clone(&seen);
            Subscriber::infallible(move |_| {
                seen.lock()
                    .expect("seen mutex")
                    .push(locale.text("VACANCY.VACANCY_STATUS.OPEN"));
            })
        };
        bus.subscribe(LANG_CHANGED, &observer);

        locale.change_language("es-MX").expect("switch");
        assert_eq!(*seen.lock().expect("seen mutex"), vec!["Abierta"]);
    }

    #[test]
    fn unsupported_tag_keeps_active_locale() {
        let locale = Locale::new(EventBus::new(), LocaleCode::En);
        let err = locale.change_language("tlh").expect_err("klingon unsupported");
        assert!(matches!(err, I18nError::UnsupportedLocale { ref tag } if tag == "tlh"));
        assert_eq!(locale.current(), LocaleCode::En);
    }

    #[test]
    fn localized_assets_follow_active_locale() {
        let locale = Locale::new(EventBus::new(), LocaleCode::En);
        let hero = "/img/page/emotion/emotion-header-img-en.webp";
        assert_eq!(locale.localized_asset(hero), hero);

        locale.change_language("ru").expect("switch");
        assert_eq!(
            locale.localized_asset(hero),
            "/img/page/emotion/emotion-header-img-ru.webp"
        );
        assert_eq!(
            locale.localized_asset("/img/page/emotion/emotion-diagram.webp"),
            "/img/page/emotion/emotion-diagram.webp"
        );
    }

    #[test]
    fn localized_links_prefix_non_default_locales() {
        let locale = Locale::new(EventBus::new(), LocaleCode::En);
        assert_eq!(locale.localized_link("emotion/color-test"), "/emotion/color-test");

        locale.change_language("fr").expect("switch");
        assert_eq!(
            locale.localized_link("/emotion/biorhythms"),
            "/fr/emotion/biorhythms"
        );
    }

    #[test]
    fn rtl_tracks_active_locale() {
        let locale = Locale::new(EventBus::new(), LocaleCode::En);
        assert!(!locale.is_rtl());
        locale.change_language("ar").expect("switch");
        assert!(locale.is_rtl());
        assert_eq!(locale.bundle().locale(), LocaleCode::Ar);
    }
}
