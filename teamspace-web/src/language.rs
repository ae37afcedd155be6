//! Supported UI languages and their embedded catalogs.

use std::collections::HashMap;

/// Information about a supported language.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    /// ISO 639-1 code.
    pub code: &'static str,
    /// Flag shown next to the language name.
    pub flag: &'static str,
    /// Embedded JSON catalog.
    pub translation: &'static str,
    /// Name of the language in itself.
    pub native_name: &'static str,
}

/// Get a map of supported languages.
#[must_use]
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "ko",
            LanguageInfo {
                code: "ko",
                flag: "🇰🇷",
                translation: include_str!("../translations/ko.json"),
                native_name: "한국어",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_are_valid_json_with_matching_keys() {
        let languages = supported_languages();
        assert_eq!(languages.len(), 2);

        let english: serde_json::Value =
            serde_json::from_str(languages["en"].translation).expect("en catalog parses");
        let korean: serde_json::Value =
            serde_json::from_str(languages["ko"].translation).expect("ko catalog parses");

        let english_sections: Vec<&String> =
            english.as_object().expect("object").keys().collect();
        let korean_sections: Vec<&String> = korean.as_object().expect("object").keys().collect();
        assert_eq!(english_sections, korean_sections);
    }
}
