use martspec_i18n::{LocaleCode, TranslationBundle};

use crate::output::{LanguageRow, format_languages};

pub(crate) fn handle_languages() {
    print!("{}", format_languages(&language_rows()));
}

pub(crate) fn language_rows() -> Vec<LanguageRow> {
    LocaleCode::all()
        .into_iter()
        .map(|locale| LanguageRow {
            code: locale.code(),
            label: locale.label(),
            rtl: TranslationBundle::new(locale).rtl(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_locale_is_listed_once() {
        let rows = language_rows();
        let codes: Vec<_> = rows.iter().map(|row| row.code).collect();
        assert_eq!(codes, vec!["en", "ru", "de", "es", "fr", "ar"]);
        assert_eq!(
            rows.iter().filter(|row| row.rtl).map(|row| row.code).collect::<Vec<_>>(),
            vec!["ar"]
        );
    }
}
