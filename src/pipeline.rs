//! The end-to-end resegmentation pipeline.
//!
//! text → language detection → trigger lookup → tokenization → resegmentation
//! → rendered text. Empty text and text without a detected language come back
//! unchanged without being tokenized.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use unicode_normalization::UnicodeNormalization;

use crate::config::Config;
use crate::error::Result;
use crate::language::{FixedLanguage, LanguageDetector, WhatlangDetector};
use crate::resegmenter::Resegmenter;
use crate::tokenizer::{validate_coverage, UnicodeWordTokenizer, WordTokenizer};
use crate::triggers::TriggerTable;

/// Result of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outcome {
    /// The detected (or configured) language code
    pub language: Option<String>,
    /// The resegmented text
    pub output: String,
    /// Number of sentence breaks inserted
    pub breaks: usize,
}

/// Detects the language of a text and breaks it up at that language's trigger words
pub struct SentenceResegmenter {
    detector: Box<dyn LanguageDetector>,
    tokenizer: Box<dyn WordTokenizer>,
    triggers: TriggerTable,
    normalize_unicode: bool,
}

impl SentenceResegmenter {
    /// Create a pipeline with whatlang detection, Unicode word tokenization
    /// and the built-in trigger table
    pub fn new() -> Self {
        SentenceResegmenter {
            detector: Box::new(WhatlangDetector::new()),
            tokenizer: Box::new(UnicodeWordTokenizer::new()),
            triggers: TriggerTable::builtin().clone(),
            normalize_unicode: false,
        }
    }

    /// Create a pipeline from a configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let detector: Box<dyn LanguageDetector> = match &config.language {
            Some(code) => Box::new(FixedLanguage::new(code.as_str())),
            None => Box::new(WhatlangDetector::with_config(&config.detection)?),
        };

        Ok(SentenceResegmenter {
            detector,
            tokenizer: Box::new(UnicodeWordTokenizer::new()),
            triggers: config.trigger_table()?,
            normalize_unicode: config.tokenizer.normalize_unicode,
        })
    }

    /// Replace the language detector
    pub fn with_detector(mut self, detector: impl LanguageDetector + 'static) -> Self {
        self.detector = Box::new(detector);
        self
    }

    /// Replace the word tokenizer
    pub fn with_tokenizer(mut self, tokenizer: impl WordTokenizer + 'static) -> Self {
        self.tokenizer = Box::new(tokenizer);
        self
    }

    /// Replace the trigger table
    pub fn with_triggers(mut self, triggers: TriggerTable) -> Self {
        self.triggers = triggers;
        self
    }

    /// Enable or disable NFC normalization of the input
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Get a reference to the trigger table
    pub fn triggers(&self) -> &TriggerTable {
        &self.triggers
    }

    /// Language code the detector reports for `text`
    pub fn detect_language(&self, text: &str) -> Option<String> {
        if text.is_empty() {
            return None;
        }
        self.detector.detect(text)
    }

    /// Run the whole pipeline.
    ///
    /// Fails only when the tokenizer breaks its contract (gaps, overlaps or
    /// text that does not match the input).
    pub fn process(&self, text: &str) -> Result<Outcome> {
        let text: Cow<str> = if self.normalize_unicode {
            Cow::Owned(text.nfc().collect())
        } else {
            Cow::Borrowed(text)
        };

        let language = match self.detect_language(&text) {
            Some(code) => code,
            None => {
                log::debug!("no language detected, passing text through");
                return Ok(Outcome {
                    language: None,
                    output: text.into_owned(),
                    breaks: 0,
                });
            }
        };

        let triggers = self.triggers.lookup(&language);
        if triggers.is_empty() {
            log::debug!("no trigger words for language {}", language);
            return Ok(Outcome {
                language: Some(language),
                output: text.into_owned(),
                breaks: 0,
            });
        }

        let tokens = self.tokenizer.tokenize(&text);
        validate_coverage(&text, &tokens)?;

        let result = Resegmenter::new(triggers).resegment_tokens(tokens);
        log::debug!(
            "resegmented {} bytes of {} text with {} break(s)",
            text.len(),
            language,
            result.breaks
        );

        Ok(Outcome {
            output: result.render(),
            breaks: result.breaks,
            language: Some(language),
        })
    }

    /// Resegment `text`, rejecting malformed tokenizations
    pub fn try_resegment(&self, text: &str) -> Result<String> {
        self.process(text).map(|outcome| outcome.output)
    }

    /// Like [`process`](Self::process), but a malformed tokenization is
    /// logged and the input comes back unchanged with no language.
    pub fn process_lenient(&self, text: &str) -> Outcome {
        match self.process(text) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("tokenizer output rejected, text left as is: {}", e);
                Outcome {
                    language: None,
                    output: text.to_string(),
                    breaks: 0,
                }
            }
        }
    }

    /// Resegment `text`. A malformed tokenization is logged and the input is
    /// returned unchanged.
    pub fn resegment(&self, text: &str) -> String {
        self.process_lenient(text).output
    }
}

impl Default for SentenceResegmenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResegmentError;
    use crate::token::{Token, TokenCategory};

    fn english() -> SentenceResegmenter {
        SentenceResegmenter::new().with_detector(FixedLanguage::new("en"))
    }

    #[test]
    fn test_empty_input() {
        let pipeline = english();
        let outcome = pipeline.process("").unwrap();
        assert_eq!(outcome.output, "");
        assert_eq!(outcome.language, None);
    }

    #[test]
    fn test_fixed_language() {
        let outcome = english().process("I left, and I came back").unwrap();
        assert_eq!(outcome.output, "I left. And I came back");
        assert_eq!(outcome.language.as_deref(), Some("en"));
        assert_eq!(outcome.breaks, 1);
    }

    #[test]
    fn test_undetected_language_skips_tokenizer() {
        let pipeline = SentenceResegmenter::new()
            .with_detector(|_: &str| -> Option<String> { None })
            .with_tokenizer(|_: &str| -> Vec<Token> { panic!("tokenizer must not run") });
        assert_eq!(pipeline.resegment("x and y"), "x and y");
    }

    #[test]
    fn test_unconfigured_language() {
        let pipeline = SentenceResegmenter::new().with_detector(FixedLanguage::new("fr"));
        let outcome = pipeline.process("je pars et je reviens si tu veux").unwrap();
        assert_eq!(outcome.output, "je pars et je reviens si tu veux");
        assert_eq!(outcome.language.as_deref(), Some("fr"));
    }

    #[test]
    fn test_custom_triggers() {
        let mut builder = crate::triggers::TriggerTableBuilder::new();
        builder.add("fr", "et");
        let pipeline = SentenceResegmenter::new()
            .with_detector(FixedLanguage::new("fr"))
            .with_triggers(builder.build());
        assert_eq!(pipeline.resegment("je pars et je reviens"), "je pars. Et je reviens");
    }

    #[test]
    fn test_malformed_tokenizer() {
        let pipeline = english().with_tokenizer(|text: &str| {
            vec![Token::from_span(text, 0, 1, TokenCategory::Word)]
        });

        assert!(matches!(
            pipeline.try_resegment("x and y"),
            Err(ResegmentError::IncompleteCoverage { covered: 1, total: 7 })
        ));
        assert_eq!(pipeline.resegment("x and y"), "x and y");

        let outcome = pipeline.process_lenient("x and y");
        assert_eq!(outcome.language, None);
        assert_eq!(outcome.breaks, 0);
    }

    #[test]
    fn test_normalization() {
        // "e" + combining acute accent
        let decomposed = "cafe\u{0301} and tea";
        let pipeline = english().with_normalization(true);
        assert_eq!(pipeline.resegment(decomposed), "caf\u{e9}. And tea");

        let pipeline = english();
        assert_eq!(pipeline.resegment(decomposed), "cafe\u{0301}. And tea");
    }

    #[test]
    fn test_from_config() {
        let config = Config::from_json_str(r#"{"language": "ru"}"#).unwrap();
        let pipeline = SentenceResegmenter::from_config(&config).unwrap();
        assert_eq!(pipeline.resegment("Я ушёл и вернулся"), "Я ушёл. И вернулся");
    }

    #[test]
    fn test_detected_english() {
        let pipeline = SentenceResegmenter::new();
        let text = "We packed the car early in the morning and drove all the way to the coast without stopping";
        assert_eq!(
            pipeline.resegment(text),
            "We packed the car early in the morning. And drove all the way to the coast without stopping"
        );
    }
}
