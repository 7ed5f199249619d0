use martspec_events::EventBus;
use martspec_i18n::{Locale, LocaleCode};
use martspec_site::{Block, LinkStyle, RenderedPage, SiteContext, page_by_slug};

fn render(locale: &Locale, site: &SiteContext) -> RenderedPage {
    page_by_slug("emotion").expect("emotion page").render(locale, site)
}

fn visible_text(page: &RenderedPage) -> Vec<String> {
    let mut texts = vec![page.title.clone()];
    for block in page.all_blocks() {
        match block {
            Block::Heading { text, .. } | Block::Paragraph { text } | Block::Pill { text, .. } => {
                texts.push(text.clone());
            }
            Block::List { items, .. } => texts.extend(items.iter().cloned()),
            Block::IconList { items } => {
                for entry in items {
                    texts.push(entry.title.clone());
                    texts.push(entry.text.clone());
                }
            }
            Block::Image(image) => texts.push(image.alt.clone()),
            Block::Link(link) => texts.push(link.label.clone()),
            Block::Card { title, text, .. } => {
                texts.push(title.clone());
                texts.push(text.clone());
            }
            Block::Section { .. } => {}
        }
    }
    texts
}

fn image_sources(page: &RenderedPage) -> Vec<String> {
    page.all_blocks()
        .into_iter()
        .filter_map(|block| match block {
            Block::Image(image) => Some(image.src.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn english_render_has_no_unresolved_keys() {
    let locale = Locale::new(EventBus::new(), LocaleCode::En);
    let page = render(&locale, &SiteContext::default());

    assert_eq!(page.title, "Understand your emotions");
    assert_eq!(page.locale, "en");
    let leaked: Vec<_> = visible_text(&page)
        .into_iter()
        .filter(|text| text.starts_with("EMOTION.") || text.starts_with("REVIEW."))
        .collect();
    assert!(leaked.is_empty(), "unresolved keys: {leaked:?}");
}

#[test]
fn partially_translated_locales_fall_back_to_english() {
    let locale = Locale::new(EventBus::new(), LocaleCode::En);
    locale.change_language("de").expect("switch");
    let page = render(&locale, &SiteContext::default());

    assert_eq!(page.title, "Verstehe deine Gefühle");
    assert!(
        visible_text(&page)
            .iter()
            .all(|text| !text.starts_with("EMOTION."))
    );
    assert!(visible_text(&page).contains(&"What our users say".to_string()));
}

#[test]
fn rerender_after_switch_uses_new_strings_assets_and_links() {
    let locale = Locale::new(EventBus::new(), LocaleCode::En);
    let site = SiteContext {
        app_id: Some(1_234_567_890),
        asset_base: "https://cdn.martspec.com/".to_string(),
    };
    let before = render(&locale, &site);
    assert!(
        image_sources(&before)
            .contains(&"https://cdn.martspec.com/img/page/emotion/emotion-header-img-en.webp".to_string())
    );

    locale.change_language("ru").expect("switch");
    let after = render(&locale, &site);

    assert_eq!(after.title, "Поймите свои эмоции");
    assert!(
        image_sources(&after)
            .contains(&"https://cdn.martspec.com/img/page/emotion/emotion-header-img-ru.webp".to_string())
    );
    assert!(
        image_sources(&after)
            .contains(&"https://cdn.martspec.com/img/page/emotion/emotion-diagram.webp".to_string())
    );
    let hrefs: Vec<_> = after.links().iter().map(|link| link.href.clone()).collect();
    assert!(hrefs.contains(&"/ru/emotion/color-test".to_string()));
    assert!(hrefs.contains(&"/ru/emotion/openness".to_string()));
    assert!(hrefs.contains(&"https://apps.apple.com/ru/app/id1234567890?see-all=reviews".to_string()));
}

#[test]
fn download_buttons_appear_only_with_an_app_id() {
    let locale = Locale::new(EventBus::new(), LocaleCode::En);
    let downloads = |site: &SiteContext| {
        render(&locale, site)
            .links()
            .iter()
            .filter(|link| link.style == LinkStyle::Download)
            .count()
    };

    assert_eq!(downloads(&SiteContext::default()), 0);
    let site = SiteContext {
        app_id: Some(42),
        ..SiteContext::default()
    };
    assert_eq!(downloads(&site), 2);
}

#[test]
fn arabic_render_is_flagged_rtl_and_encodes_as_json() {
    let locale = Locale::new(EventBus::new(), LocaleCode::En);
    locale.change_language("ar").expect("switch");
    let page = render(&locale, &SiteContext::default());

    assert!(page.rtl);
    let json: serde_json::Value =
        serde_json::from_str(&page.to_json().expect("encode")).expect("decode");
    assert_eq!(json["slug"], "emotion");
    assert_eq!(json["rtl"], true);
    assert_eq!(json["blocks"][0]["kind"], "heading");
}
