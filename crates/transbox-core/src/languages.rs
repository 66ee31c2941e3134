//! Languages offered by the translation panel.

use serde::{Deserialize, Serialize};

/// A selectable translation language.
///
/// The set is fixed to the five languages the form offers. Serialized as
/// the two-letter code (`"en"`, `"zh"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,

    /// Chinese
    Zh,

    /// Spanish
    Es,

    /// French
    Fr,

    /// German
    De,
}

impl Language {
    /// Every language, in the order the source select lists them.
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Zh,
        Language::Es,
        Language::Fr,
        Language::De,
    ];

    /// Two-letter code embedded in translation results.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    /// Parses a two-letter code back into a language.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_parse_back_to_their_language() {
        for language in Language::ALL {
            assert_eq!(
                Language::from_code(language.code()),
                Some(language),
                "code {} did not parse back",
                language.code()
            );
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert_eq!(Language::from_code("jp"), None);
        assert_eq!(Language::from_code(""), None);
        // Select values are lowercase; parsing is case-sensitive.
        assert_eq!(Language::from_code("EN"), None);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::En);
    }
}
