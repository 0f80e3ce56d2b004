//! Dominant-language detection.
//!
//! The resegmenter only needs one thing from a detector: the code of the
//! dominant language of a string, or nothing. [`WhatlangDetector`] first
//! counts frequent function words, which settles short texts, and falls back
//! to whatlang's trigram statistics when no language clearly wins.
//! [`FixedLanguage`] pins the answer.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;
use whatlang::{Detector, Lang};

use crate::error::{ResegmentError, Result};
use crate::triggers::{TriggerTable, TriggerTableBuilder};

pub const ENGLISH: &str = "en";
pub const SPANISH: &str = "es";
pub const GERMAN: &str = "de";
pub const RUSSIAN: &str = "ru";

/// Returns the dominant language of a text
pub trait LanguageDetector: Send + Sync {
    /// Best-guess language code, or `None` when the text is empty or no
    /// language is dominant enough
    fn detect(&self, text: &str) -> Option<String>;
}

impl<F> LanguageDetector for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn detect(&self, text: &str) -> Option<String> {
        self(text)
    }
}

/// Two-letter codes for the languages that have one; whatlang's own
/// three-letter code for the rest
pub fn lang_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => ENGLISH,
        Lang::Spa => SPANISH,
        Lang::Deu => GERMAN,
        Lang::Rus => RUSSIAN,
        Lang::Fra => "fr",
        Lang::Ita => "it",
        Lang::Por => "pt",
        Lang::Nld => "nl",
        Lang::Ukr => "uk",
        Lang::Bel => "be",
        Lang::Bul => "bg",
        Lang::Pol => "pl",
        Lang::Ces => "cs",
        Lang::Swe => "sv",
        Lang::Dan => "da",
        Lang::Fin => "fi",
        Lang::Tur => "tr",
        Lang::Cmn => "zh",
        Lang::Jpn => "ja",
        Lang::Kor => "ko",
        Lang::Ara => "ar",
        Lang::Hin => "hi",
        l => l.code(),
    }
}

/// Inverse of [`lang_code`]
pub fn lang_from_code(code: &str) -> Option<Lang> {
    let lang = match code {
        ENGLISH => Lang::Eng,
        SPANISH => Lang::Spa,
        GERMAN => Lang::Deu,
        RUSSIAN => Lang::Rus,
        "fr" => Lang::Fra,
        "it" => Lang::Ita,
        "pt" => Lang::Por,
        "nl" => Lang::Nld,
        "uk" => Lang::Ukr,
        "be" => Lang::Bel,
        "bg" => Lang::Bul,
        "pl" => Lang::Pol,
        "cs" => Lang::Ces,
        "sv" => Lang::Swe,
        "da" => Lang::Dan,
        "fi" => Lang::Fin,
        "tr" => Lang::Tur,
        "zh" => Lang::Cmn,
        "ja" => Lang::Jpn,
        "ko" => Lang::Kor,
        "ar" => Lang::Ara,
        "hi" => Lang::Hin,
        other => return Lang::from_code(other),
    };
    Some(lang)
}

/// Embedded function-word lists (format: code\tword\tword...)
static FUNCTION_WORDS_TSV: &str = include_str!("data/function_words.tsv");

static FUNCTION_WORDS: Lazy<TriggerTable> = Lazy::new(|| {
    let mut builder = TriggerTableBuilder::new();
    builder.load_tsv(FUNCTION_WORDS_TSV);
    builder.build()
});

/// Language whose function words occur in `text` more often than any other
/// language's.
///
/// Only codes in `allowed` take part unless it is empty. Returns `None` when
/// no function word occurs or when the top two languages tie.
pub fn vote_function_words(text: &str, allowed: &[String]) -> Option<String> {
    let words: Vec<String> = text.unicode_words().map(str::to_lowercase).collect();
    if words.is_empty() {
        return None;
    }

    let mut best: Option<(&str, usize)> = None;
    let mut runner_up = 0;

    for code in FUNCTION_WORDS.languages() {
        if !allowed.is_empty() && !allowed.iter().any(|a| a == code) {
            continue;
        }

        let list = FUNCTION_WORDS.lookup(code);
        let hits = words.iter().filter(|w| list.contains(w)).count();

        match best {
            Some((_, top)) if hits > top => {
                runner_up = top;
                best = Some((code, hits));
            }
            Some(_) => runner_up = runner_up.max(hits),
            None => best = Some((code, hits)),
        }
    }

    match best {
        Some((code, hits)) if hits > 0 && hits > runner_up => Some(code.to_string()),
        _ => None,
    }
}

/// Detector settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Guesses below this confidence (0.0 to 1.0) count as undetermined.
    /// Applies to whatlang's guesses only.
    pub min_confidence: f64,
    /// Restrict detection to these language codes (empty: all languages)
    pub allowlist: Vec<String>,
    /// Let a clear function-word majority decide before whatlang runs
    pub function_words: bool,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.0,
            allowlist: Vec::new(),
            function_words: true,
        }
    }
}

/// whatlang-based language detector
pub struct WhatlangDetector {
    detector: Detector,
    min_confidence: f64,
    allowlist: Vec<String>,
    function_words: bool,
}

impl WhatlangDetector {
    /// Create a detector over all languages that always returns its best guess
    pub fn new() -> Self {
        WhatlangDetector {
            detector: Detector::new(),
            min_confidence: 0.0,
            allowlist: Vec::new(),
            function_words: true,
        }
    }

    /// Create a detector from settings
    pub fn with_config(config: &DetectorConfig) -> Result<Self> {
        let detector = if config.allowlist.is_empty() {
            Detector::new()
        } else {
            let langs = config
                .allowlist
                .iter()
                .map(|code| {
                    lang_from_code(code).ok_or_else(|| ResegmentError::UnknownLanguage(code.clone()))
                })
                .collect::<Result<Vec<Lang>>>()?;
            Detector::with_allowlist(langs)
        };

        Ok(WhatlangDetector {
            detector,
            min_confidence: config.min_confidence,
            allowlist: config.allowlist.clone(),
            function_words: config.function_words,
        })
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        if self.function_words {
            if let Some(code) = vote_function_words(text, &self.allowlist) {
                log::debug!("function words point to {}", code);
                return Some(code);
            }
        }

        let info = self.detector.detect(text)?;
        if info.confidence() < self.min_confidence {
            log::debug!(
                "discarding {} guess with confidence {:.2}",
                info.lang().code(),
                info.confidence()
            );
            return None;
        }

        Some(lang_code(info.lang()).to_string())
    }
}

/// A detector that always answers with the same language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedLanguage(pub String);

impl FixedLanguage {
    pub fn new(code: impl Into<String>) -> Self {
        FixedLanguage(code.into())
    }
}

impl LanguageDetector for FixedLanguage {
    fn detect(&self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            None
        } else {
            Some(self.0.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_english() {
        let detector = WhatlangDetector::new();
        let lang = detector.detect(
            "The weather was lovely this morning, so we walked down to the harbour and watched the boats come in.",
        );
        assert_eq!(lang.as_deref(), Some(ENGLISH));
    }

    #[test]
    fn test_detect_russian() {
        let detector = WhatlangDetector::new();
        let lang = detector.detect(
            "Вчера вечером мы долго гуляли по городу, а потом вернулись домой и пили горячий чай с вареньем.",
        );
        assert_eq!(lang.as_deref(), Some(RUSSIAN));
    }

    #[test]
    fn test_detect_empty() {
        let detector = WhatlangDetector::new();
        assert_eq!(detector.detect(""), None);
        assert_eq!(detector.detect("   "), None);
    }

    #[test]
    fn test_min_confidence() {
        let config = DetectorConfig {
            min_confidence: 1.1,
            ..Default::default()
        };
        let detector = WhatlangDetector::with_config(&config).unwrap();
        assert_eq!(detector.detect("Lorem ipsum dolor sit amet"), None);
    }

    #[test]
    fn test_short_texts() {
        let detector = WhatlangDetector::new();
        assert_eq!(detector.detect("I left and I came back").as_deref(), Some(ENGLISH));
        assert_eq!(detector.detect("pan y leche").as_deref(), Some(SPANISH));
        assert_eq!(detector.detect("ven si quieres y come").as_deref(), Some(SPANISH));
        assert_eq!(detector.detect("Tee oder Kaffee").as_deref(), Some(GERMAN));
        assert_eq!(detector.detect("Я ушёл и вернулся").as_deref(), Some(RUSSIAN));
    }

    #[test]
    fn test_vote_function_words() {
        assert_eq!(vote_function_words("je pars et je reviens", &[]).as_deref(), Some("fr"));
        assert_eq!(vote_function_words("Lorem ipsum", &[]), None);
        assert_eq!(vote_function_words("", &[]), None);

        // "de" is on the Spanish, French, Portuguese and Dutch lists
        assert_eq!(vote_function_words("de", &[]), None);
        let spanish_only = vec![SPANISH.to_string()];
        assert_eq!(vote_function_words("de", &spanish_only).as_deref(), Some(SPANISH));
    }

    #[test]
    fn test_function_words_disabled() {
        let config = DetectorConfig {
            function_words: false,
            min_confidence: 1.1,
            ..Default::default()
        };
        let detector = WhatlangDetector::with_config(&config).unwrap();
        assert_eq!(detector.detect("I left and I came back"), None);
    }

    #[test]
    fn test_allowlist() {
        let config = DetectorConfig {
            allowlist: vec!["en".to_string(), "de".to_string()],
            ..Default::default()
        };
        let detector = WhatlangDetector::with_config(&config).unwrap();
        let lang = detector.detect("Ich gehe heute Abend mit meinen Freunden ins Kino und danach essen.");
        assert_eq!(lang.as_deref(), Some(GERMAN));
    }

    #[test]
    fn test_allowlist_unknown_code() {
        let config = DetectorConfig {
            allowlist: vec!["klingon".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            WhatlangDetector::with_config(&config),
            Err(ResegmentError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_code_mapping() {
        assert_eq!(lang_code(Lang::Spa), "es");
        assert_eq!(lang_from_code("ru"), Some(Lang::Rus));
        assert_eq!(lang_from_code("epo"), Some(Lang::Epo));
        assert_eq!(lang_code(Lang::Epo), "epo");
        assert_eq!(lang_from_code("??"), None);
    }

    #[test]
    fn test_fixed_language() {
        let detector = FixedLanguage::new("es");
        assert_eq!(detector.detect("hola y adiós").as_deref(), Some("es"));
        assert_eq!(detector.detect(""), None);
    }
}
