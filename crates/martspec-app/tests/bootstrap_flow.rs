use martspec_app::{AppError, Application};
use martspec_config::SiteConfig;
use martspec_events::{LANG_CHANGED, Subscriber};
use martspec_i18n::{I18nError, LocaleCode};
use martspec_test_support::EventRecorder;

fn config_with(languages: &[&str]) -> SiteConfig {
    SiteConfig {
        preferred_languages: languages.iter().map(ToString::to_string).collect(),
        ..SiteConfig::default()
    }
}

#[test]
fn start_renders_from_the_init_notification_and_the_initial_render() -> anyhow::Result<()> {
    let app = Application::start(&config_with(&["ru-RU", "en;q=0.5"]))?;

    assert_eq!(app.render_count(), 2);
    let page = app.current_page().ok_or_else(|| anyhow::anyhow!("no page"))?;
    assert_eq!(page.locale, "ru");
    assert_eq!(page.title, "Поймите свои эмоции");
    Ok(())
}

#[test]
fn each_language_change_rerenders_once() -> anyhow::Result<()> {
    let app = Application::start(&config_with(&[]))?;
    let recorder = EventRecorder::attach(app.bus(), LANG_CHANGED);

    assert_eq!(app.change_language("fr")?, LocaleCode::Fr);
    assert_eq!(app.render_count(), 3);
    assert_eq!(
        app.current_page().map(|page| page.title).as_deref(),
        Some("Comprenez vos émotions")
    );

    app.change_language("fr-CA")?;
    assert_eq!(app.render_count(), 3);

    app.change_language("es")?;
    assert_eq!(app.render_count(), 4);
    assert_eq!(recorder.language_codes(), vec!["fr", "es"]);
    Ok(())
}

#[test]
fn unsupported_language_keeps_the_current_render() -> anyhow::Result<()> {
    let app = Application::start(&config_with(&["de"]))?;

    let err = app.change_language("xx").expect_err("unsupported");

    assert!(matches!(
        err,
        AppError::Locale {
            source: I18nError::UnsupportedLocale { .. },
            ..
        }
    ));
    assert_eq!(app.render_count(), 2);
    assert_eq!(app.locale().current(), LocaleCode::De);
    Ok(())
}

#[test]
fn later_subscriber_failure_is_reported_after_the_rerender() -> anyhow::Result<()> {
    let app = Application::start(&config_with(&[]))?;
    app.bus()
        .subscribe(LANG_CHANGED, &Subscriber::new(|_| Err("analytics down".into())));

    let err = app.change_language("ar").expect_err("subscriber fails");

    assert!(matches!(
        err,
        AppError::Locale {
            source: I18nError::Notify { .. },
            ..
        }
    ));
    assert_eq!(app.render_count(), 3);
    assert!(app.current_page().is_some_and(|page| page.rtl));
    Ok(())
}
