//! # resegment-rs
//!
//! Break a run-on sentence into several sentences at its conjunctions.
//!
//! The dominant language of the text picks a set of trigger words ("and",
//! "if", "y", "si", "und", "oder", "и", "если", ...). Every trigger word
//! inside the text starts a new sentence: the separator in front of it is
//! replaced by `". "` and its first letter is upper-cased. A trigger at the
//! very start or the very end of the text is left alone.
//!
//! ## Quick Start
//!
//! ```rust
//! use resegment::{FixedLanguage, SentenceResegmenter};
//!
//! let pipeline = SentenceResegmenter::new().with_detector(FixedLanguage::new("en"));
//! assert_eq!(pipeline.resegment("I left, and I came back"), "I left. And I came back");
//! assert_eq!(pipeline.resegment("go home and"), "go home and");
//! ```
//!
//! ## Detected Language
//!
//! With no pinned language the dominant language is detected with whatlang:
//!
//! ```rust
//! let text = "Мы долго гуляли по набережной и смотрели на корабли в вечернем порту";
//! println!("{}", resegment::resegment(text));
//! ```
//!
//! ## Low-Level API
//!
//! ```rust
//! use resegment::{Resegmenter, TriggerTable, UnicodeWordTokenizer, WordTokenizer};
//!
//! let tokens = UnicodeWordTokenizer::new().tokenize("ven si quieres");
//! let spanish = TriggerTable::builtin().lookup("es");
//! assert_eq!(Resegmenter::new(spanish).resegment(tokens), "ven. Si quieres");
//! ```

pub mod char_categories;
pub mod chunker;
pub mod config;
pub mod error;
pub mod language;
pub mod pipeline;
pub mod resegmenter;
pub mod session;
pub mod token;
pub mod tokenizer;
pub mod triggers;

// Python bindings (only compiled when the "python" feature is enabled)
#[cfg(feature = "python")]
pub mod python;

use once_cell::sync::Lazy;

// Re-export main types for convenience
pub use char_categories::{classify_segment, get_char_category, CharCategory};
pub use chunker::{Chunk, Chunker};
pub use config::Config;
pub use error::{ResegmentError, Result};
pub use language::{
    vote_function_words, DetectorConfig, FixedLanguage, LanguageDetector, WhatlangDetector,
};
pub use pipeline::{Outcome, SentenceResegmenter};
pub use resegmenter::{Resegmented, Resegmenter};
pub use session::ResegmentSession;
pub use token::{render, Token, TokenCategory};
pub use tokenizer::{validate_coverage, UnicodeWordTokenizer, WordTokenizer};
pub use triggers::{TriggerSet, TriggerTable, TriggerTableBuilder};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Pipeline with default settings, shared by [`resegment`] and [`try_resegment`]
static DEFAULT_PIPELINE: Lazy<SentenceResegmenter> = Lazy::new(SentenceResegmenter::new);

/// Resegment `text` with language detection and the built-in trigger words
pub fn resegment(text: &str) -> String {
    DEFAULT_PIPELINE.resegment(text)
}

/// Like [`resegment`], but reports a malformed tokenization instead of
/// returning the input unchanged
pub fn try_resegment(text: &str) -> Result<String> {
    DEFAULT_PIPELINE.try_resegment(text)
}
