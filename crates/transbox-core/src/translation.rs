//! Mock translation engine.
//!
//! Translation is simulated: the "result" is a template that echoes the
//! input text and the selected language codes. No translation service is
//! ever contacted; the UI adds the latency that a real one would cost.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::languages::Language;

/// Simulated latency of a translation call, in milliseconds.
pub const TRANSLATION_DELAY_MS: u32 = 1_000;

/// Source and target selection for a translation.
///
/// Defaults to the English-to-Chinese pair the form starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Language the input text is written in
    pub source: Language,

    /// Language to translate into
    pub target: Language,
}

impl LanguagePair {
    /// Returns the pair with source and target exchanged.
    pub fn swapped(self) -> LanguagePair {
        LanguagePair {
            source: self.target,
            target: self.source,
        }
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        LanguagePair {
            source: Language::En,
            target: Language::Zh,
        }
    }
}

/// A translation job as submitted from the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate, exactly as typed (not trimmed)
    pub text: String,

    /// Selected language pair
    pub languages: LanguagePair,
}

/// Produces the simulated translation for `request`.
///
/// Fails with [`Error::EmptyInput`] when the text is blank. The UI disables
/// the submit control in that case, so the error only surfaces on direct
/// invocation.
pub fn translate(request: &TranslationRequest) -> Result<String, Error> {
    if request.text.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(format!(
        "这是一个模拟的翻译结果：\n原文：{}\n从 {} 翻译到 {}",
        request.text,
        request.languages.source.code(),
        request.languages.target.code()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to build a request for the given text and codes.
    fn request(text: &str, source: Language, target: Language) -> TranslationRequest {
        TranslationRequest {
            text: text.to_string(),
            languages: LanguagePair { source, target },
        }
    }

    #[test]
    fn test_translate_produces_template_result() {
        let result = translate(&request("Hello", Language::En, Language::Zh))
            .expect("non-empty input must translate");
        assert_eq!(result, "这是一个模拟的翻译结果：\n原文：Hello\n从 en 翻译到 zh");
    }

    #[test]
    fn test_result_embeds_text_and_codes_for_every_pair() {
        for source in Language::ALL {
            for target in Language::ALL {
                let result = translate(&request("bonjour", source, target))
                    .expect("non-empty input must translate");
                assert!(
                    result.contains("bonjour"),
                    "result for {} to {} lost the input text",
                    source.code(),
                    target.code()
                );
                assert!(result.contains(source.code()));
                assert!(result.contains(target.code()));
            }
        }
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert_eq!(
            translate(&request("", Language::En, Language::Zh)),
            Err(Error::EmptyInput)
        );
        assert_eq!(
            translate(&request("  \n\t ", Language::En, Language::Zh)),
            Err(Error::EmptyInput)
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_kept_in_the_result() {
        // Validation trims, synthesis does not: the text is echoed as typed.
        let result = translate(&request("  hi  ", Language::En, Language::De))
            .expect("non-blank input must translate");
        assert!(result.contains("原文：  hi  "));
    }

    #[test]
    fn test_identical_source_and_target_is_allowed() {
        let result = translate(&request("hola", Language::Es, Language::Es))
            .expect("same-language pairs are not validated away");
        assert!(result.contains("从 es 翻译到 es"));
    }

    #[test]
    fn test_swap_exchanges_source_and_target() {
        let pair = LanguagePair {
            source: Language::En,
            target: Language::Fr,
        };
        let swapped = pair.swapped();
        assert_eq!(swapped.source, Language::Fr);
        assert_eq!(swapped.target, Language::En);
    }

    #[test]
    fn test_swap_twice_restores_the_pair() {
        for source in Language::ALL {
            for target in Language::ALL {
                let pair = LanguagePair { source, target };
                assert_eq!(pair.swapped().swapped(), pair);
            }
        }
    }

    #[test]
    fn test_default_pair_is_english_to_chinese() {
        let pair = LanguagePair::default();
        assert_eq!(pair.source, Language::En);
        assert_eq!(pair.target, Language::Zh);
    }
}
