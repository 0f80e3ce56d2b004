//! Token representation for resegmentation.
//!
//! A Token is a categorized slice of the input text: a word, a run of
//! punctuation, a run of whitespace, or anything else. The resegmenter adds
//! one synthetic category, [`TokenCategory::Break`], for the sentence break it
//! inserts in front of a trigger word.

use serde::{Deserialize, Serialize};

/// The category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TokenCategory {
    /// Letters and/or digits
    #[default]
    Word,
    /// A run of punctuation characters
    Punct,
    /// A run of whitespace characters
    Whitespace,
    /// Symbols, emoji and anything else
    Other,
    /// Synthetic `". "` plus capitalized trigger word
    Break,
}

impl TokenCategory {
    /// Convert to a string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Word => "WORD",
            TokenCategory::Punct => "PUNCT",
            TokenCategory::Whitespace => "SPACE",
            TokenCategory::Other => "OTHER",
            TokenCategory::Break => "BREAK",
        }
    }
}

/// A single token
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Token {
    /// The text of the token
    pub text: String,

    /// Starting byte offset in the original string
    pub start: usize,

    /// Length in bytes of the span this token covers in the original string
    pub len: usize,

    /// The category of this token
    pub category: TokenCategory,
}

impl Token {
    /// Create a token with text and position
    pub fn with_text(text: String, start: usize, len: usize, category: TokenCategory) -> Self {
        Token {
            text,
            start,
            len,
            category,
        }
    }

    /// Create a token that covers `text[start..start + len]`
    pub fn from_span(source: &str, start: usize, len: usize, category: TokenCategory) -> Self {
        Token::with_text(source[start..start + len].to_string(), start, len, category)
    }

    /// Byte offset just past the end of this token's span
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check if this is a word token
    pub fn is_word(&self) -> bool {
        self.category == TokenCategory::Word
    }

    /// Check if this is a punctuation run
    pub fn is_punct(&self) -> bool {
        self.category == TokenCategory::Punct
    }

    /// Check if this is a whitespace run
    pub fn is_whitespace(&self) -> bool {
        self.category == TokenCategory::Whitespace
    }

    /// Check if this is a sentence break inserted by the resegmenter
    pub fn is_break(&self) -> bool {
        self.category == TokenCategory::Break
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Concatenate the text of every token, in order, with no separators.
pub fn render(tokens: &[Token]) -> String {
    let capacity = tokens.iter().map(|t| t.text.len()).sum();
    let mut out = String::with_capacity(capacity);
    for token in tokens {
        out.push_str(&token.text);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::with_text("and".to_string(), 7, 3, TokenCategory::Word);
        assert_eq!(token.text, "and");
        assert_eq!(token.start, 7);
        assert_eq!(token.end(), 10);
        assert!(token.is_word());
    }

    #[test]
    fn test_from_span() {
        let text = "Я пошёл";
        let token = Token::from_span(text, 0, 2, TokenCategory::Word);
        assert_eq!(token.text, "Я");
        let space = Token::from_span(text, 2, 1, TokenCategory::Whitespace);
        assert!(space.is_whitespace());
    }

    #[test]
    fn test_render() {
        let tokens = vec![
            Token::with_text("I".to_string(), 0, 1, TokenCategory::Word),
            Token::with_text(" ".to_string(), 1, 1, TokenCategory::Whitespace),
            Token::with_text("left".to_string(), 2, 4, TokenCategory::Word),
            Token::with_text(". And".to_string(), 7, 3, TokenCategory::Break),
        ];
        assert_eq!(render(&tokens), "I left. And");
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn test_category_names() {
        assert_eq!(TokenCategory::Whitespace.as_str(), "SPACE");
        assert_eq!(TokenCategory::Break.as_str(), "BREAK");
        assert_eq!(format!("{}", Token::with_text("oder".into(), 0, 4, TokenCategory::Word)), "oder");
    }
}
