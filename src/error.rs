//! Error types.

use thiserror::Error;

/// Errors that can occur while configuring or running a resegmenter
#[derive(Debug, Error)]
pub enum ResegmentError {
    /// A tokenizer left a hole between two tokens, or its tokens overlap
    #[error("token gap at byte {expected}: next token starts at byte {found}")]
    TokenGap { expected: usize, found: usize },

    /// A token's text is not the text of the span it claims to cover
    #[error("token at byte {start} does not match the input text")]
    TokenMismatch { start: usize },

    /// The tokens stop before the end of the input
    #[error("tokens cover {covered} of {total} bytes")]
    IncompleteCoverage { covered: usize, total: usize },

    /// A language code that the detector does not know
    #[error("unknown language code: {0}")]
    UnknownLanguage(String),

    /// IO error while reading configuration or trigger tables
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResegmentError>;
