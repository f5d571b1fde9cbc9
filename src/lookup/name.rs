use crate::{
    font_file::Font,
    locale::{same_culture, LocaleMap},
    platform::Platform,
    table::{NameId, NameRecord},
};

/// The text of the name record with `name_id` whose culture is `locale`.
///
/// A Windows record is preferred over records of other platforms, otherwise
/// the first match in directory order is used. There is no fallback to a
/// parent or default culture; `""` is returned when nothing matches.
pub fn resolve_name(
    font: &Font,
    name_id: NameId,
    locale: &str,
    locales: &dyn LocaleMap,
) -> String {
    let name_table = font.name_table();

    let culture = |record: &NameRecord| {
        name_table
            .lang_tag(record.language_id)
            .or_else(|| locales.culture(record.platform_id, record.language_id))
            .unwrap_or("")
    };

    let mut candidates = name_table
        .name_records
        .iter()
        .filter(|record| record.name_id == name_id && same_culture(culture(record), locale));

    let Some(first) = candidates.next() else {
        return String::new();
    };

    if first.platform() == Some(Platform::Windows) {
        return first.text.clone();
    }

    candidates
        .find(|record| record.platform() == Some(Platform::Windows))
        .unwrap_or(first)
        .text
        .clone()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{locale::BuiltinLocales, test_util::sample_font};

    struct NoLocales;

    impl LocaleMap for NoLocales {
        fn culture(&self, _platform_id: u16, _language_id: u16) -> Option<&str> {
            None
        }
    }

    fn font() -> Font {
        Font::parse(&sample_font().build()).unwrap()
    }

    #[test]
    fn exact_culture() {
        let font = font();

        assert_eq!(resolve_name(&font, NameId::FAMILY_NAME, "en-US", &BuiltinLocales), "Sample");
        assert_eq!(
            resolve_name(&font, NameId::SUBFAMILY_NAME, "nl-NL", &BuiltinLocales),
            "Standaard"
        );
    }

    #[test]
    fn windows_record_is_preferred() {
        let font = font();

        // the Macintosh record comes first in the table
        assert_eq!(resolve_name(&font, NameId::FAMILY_NAME, "en", &BuiltinLocales), "Sample Win");
    }

    #[test]
    fn other_platforms_when_windows_has_none() {
        let font = font();

        assert_eq!(
            resolve_name(&font, NameId::FULL_NAME, "en", &BuiltinLocales),
            "Sample Mac Full"
        );
    }

    #[test]
    fn no_match_is_empty() {
        let font = font();

        assert_eq!(resolve_name(&font, NameId::FAMILY_NAME, "fr-FR", &BuiltinLocales), "");
        assert_eq!(resolve_name(&font, NameId::DESIGNER, "en-US", &BuiltinLocales), "");
        // no fallback from a region to its language
        assert_eq!(resolve_name(&font, NameId::SUBFAMILY_NAME, "nl", &BuiltinLocales), "");
    }

    #[test]
    fn culture_case_is_ignored() {
        let font = font();

        assert_eq!(resolve_name(&font, NameId::FAMILY_NAME, "EN-us", &BuiltinLocales), "Sample");
    }

    #[test]
    fn language_tag_records() {
        let font = font();

        assert_eq!(
            resolve_name(&font, NameId::SUBFAMILY_NAME, "nl-BE", &NoLocales),
            "Gewoon"
        );
    }

    #[test]
    fn unknown_languages_are_invariant() {
        let font = font();

        assert_eq!(resolve_name(&font, NameId::FAMILY_NAME, "", &NoLocales), "Sample Win");
        assert_eq!(resolve_name(&font, NameId::FAMILY_NAME, "en-US", &NoLocales), "");
    }

    #[test]
    fn font_convenience() {
        let font = font();

        assert_eq!(font.name(NameId::SUBFAMILY_NAME, "en-US"), "Regular");
    }
}
