//! Startup order for the site.
//!
//! # Design
//! - The re-render subscriber is registered before the locale is
//!   initialised, so the first `LANG_CHANGED` from `init` is observed.
//! - An explicit initial render follows `init`; a fresh application has
//!   therefore rendered twice.
//! - The subscriber holds the locale; dropping the application unsubscribes
//!   it to break the bus -> subscriber -> locale -> bus cycle.

use std::sync::Arc;

use martspec_config::SiteConfig;
use martspec_events::{EventBus, LANG_CHANGED, Subscriber};
use martspec_i18n::{Locale, LocaleCode};
use martspec_site::{Page, RenderedPage, SiteContext, page_by_slug};
use martspec_telemetry::{GlobalContextGuard, LoggingConfig};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::target::RenderTarget;

/// Page shown when none is requested.
pub const DEFAULT_PAGE: &str = "emotion";

/// A started site: event bus, active locale and the rendered page.
pub struct Application {
    bus: EventBus,
    locale: Arc<Locale>,
    site: SiteContext,
    page: &'static dyn Page,
    target: RenderTarget,
    rerender: Subscriber,
}

impl Application {
    /// Start the default page.
    ///
    /// # Errors
    ///
    /// See [`Application::start_with_page`].
    pub fn start(config: &SiteConfig) -> AppResult<Self> {
        Self::start_with_page(config, DEFAULT_PAGE)
    }

    /// Start the page registered under `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Site`] for an unknown slug and [`AppError::Locale`]
    /// when the initial language notification fails.
    pub fn start_with_page(config: &SiteConfig, slug: &str) -> AppResult<Self> {
        let page = page_by_slug(slug).map_err(|err| AppError::site("page_by_slug", err))?;

        let bus = EventBus::new();
        let locale = Arc::new(Locale::new(bus.clone(), config.default_locale));
        let site = SiteContext {
            app_id: config.app_id,
            asset_base: config.asset_base.clone(),
        };
        let target = RenderTarget::new();

        let rerender = rerender_subscriber(Arc::clone(&locale), site.clone(), page, target.clone());
        bus.subscribe(LANG_CHANGED, &rerender);

        let app = Self {
            bus,
            locale,
            site,
            page,
            target,
            rerender,
        };
        let selected = app
            .locale
            .init(&config.preferred_languages)
            .map_err(|err| AppError::locale("locale.init", err))?;
        app.render();
        info!(page = page.slug(), locale = selected.code(), "site started");
        Ok(app)
    }

    /// Switch the active language; the page re-renders through the bus.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Locale`] for unsupported tags or a failed
    /// notification.
    pub fn change_language(&self, tag: &str) -> AppResult<LocaleCode> {
        self.locale
            .change_language(tag)
            .map_err(|err| AppError::locale("locale.change_language", err))
    }

    /// Render the page now, outside of any language change.
    pub fn render(&self) {
        self.target.show(self.page.render(&self.locale, &self.site));
    }

    /// Number of renders since start.
    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.target.render_count()
    }

    /// Latest rendered page.
    #[must_use]
    pub fn current_page(&self) -> Option<RenderedPage> {
        self.target.current()
    }

    /// Active locale.
    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Bus carrying language notifications.
    #[must_use]
    pub const fn bus(&self) -> &EventBus {
        &self.bus
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        self.bus.unsubscribe(LANG_CHANGED, &self.rerender);
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("page", &self.page.slug())
            .field("locale", &self.locale.current())
            .field("renders", &self.target.render_count())
            .finish_non_exhaustive()
    }
}

fn rerender_subscriber(
    locale: Arc<Locale>,
    site: SiteContext,
    page: &'static dyn Page,
    target: RenderTarget,
) -> Subscriber {
    Subscriber::infallible(move |event| {
        debug!(
            page = page.slug(),
            locale = event.language_code().unwrap_or_default(),
            "re-rendering after language change"
        );
        target.show(page.render(&locale, &site));
    })
}

/// Boot the site from the environment and print the initial render.
///
/// # Errors
///
/// Returns an error if configuration, logging or startup fails.
pub fn run_app() -> AppResult<()> {
    let config = SiteConfig::from_env().map_err(|err| AppError::config("config.from_env", err))?;
    let logging = LoggingConfig {
        level: &config.log_level,
        format: config.log_format,
        ..LoggingConfig::default()
    };
    martspec_telemetry::init_logging(&logging)
        .map_err(|err| AppError::telemetry("telemetry.init", err))?;
    let _context = GlobalContextGuard::new("bootstrap");

    info!("Martspec site bootstrap starting");
    let app = Application::start(&config)?;
    let page = app
        .current_page()
        .ok_or(AppError::MissingState { field: "rendered_page" })?;
    println!("{page}");
    Ok(())
}
