//! Component fixtures used for previews and visual checks.

use crate::components::pill::PillText;

/// Vacancy marked as open.
pub const PILL_OPEN: PillText = PillText {
    text_key: "VACANCY.VACANCY_STATUS.OPEN",
    background: "#E5F4D9",
    color: "#219B3F",
};

/// Vacancy marked as closed.
pub const PILL_CLOSED: PillText = PillText {
    text_key: "VACANCY.VACANCY_STATUS.CLOSED",
    background: "#FFF3E9",
    color: "#FD7E14",
};

/// Every pill story by name.
#[must_use]
pub const fn pill_stories() -> [(&'static str, PillText); 2] {
    [("open", PILL_OPEN), ("closed", PILL_CLOSED)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Block, Component, RenderContext, SiteContext};
    use martspec_i18n::{Locale, LocaleCode};

    #[test]
    fn vacancy_pills_follow_the_active_locale() {
        let locale = Locale::new(martspec_events::EventBus::new(), LocaleCode::En);
        let site = SiteContext::default();

        let texts = |locale: &Locale| -> Vec<String> {
            let ctx = RenderContext::new(locale, &site);
            pill_stories()
                .iter()
                .flat_map(|(_, pill)| pill.render(&ctx))
                .filter_map(|block| match block {
                    Block::Pill { text, .. } => Some(text),
                    _ => None,
                })
                .collect()
        };

        assert_eq!(texts(&locale), vec!["Open", "Closed"]);
        locale.change_language("es").expect("switch");
        assert_eq!(texts(&locale)[0], "Abierta");
    }

    #[test]
    fn closed_pill_uses_warning_palette() {
        let ctx_locale = Locale::new(martspec_events::EventBus::new(), LocaleCode::En);
        let site = SiteContext::default();
        let blocks = PILL_CLOSED.render(&RenderContext::new(&ctx_locale, &site));
        assert!(matches!(
            blocks.as_slice(),
            [Block::Pill { background, color, .. }] if background == "#FFF3E9" && color == "#FD7E14"
        ));
    }
}
