//! Word tokenization.
//!
//! A [`WordTokenizer`] turns a string into an ordered, exhaustive,
//! non-overlapping list of categorized tokens. The default implementation
//! works on Unicode word boundaries; callers may plug in their own and have it
//! checked with [`validate_coverage`].

use crate::chunker::Chunker;
use crate::error::{ResegmentError, Result};
use crate::token::Token;

/// Splits text into categorized tokens.
///
/// Implementations must be total (every byte of the input is covered),
/// order-preserving and lossless: concatenating the token texts gives back
/// the input. Whitespace and punctuation runs must be labelled as such.
pub trait WordTokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

impl<F> WordTokenizer for F
where
    F: Fn(&str) -> Vec<Token> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self(text)
    }
}

/// Tokenizer based on Unicode (UAX #29) word boundaries
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl WordTokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        Chunker::new(text)
            .make_chunks()
            .into_iter()
            .map(|chunk| Token::from_span(text, chunk.start, chunk.len, chunk.category))
            .collect()
    }
}

/// Check that `tokens` cover `text` exactly, in order, without gaps or overlaps.
pub fn validate_coverage(text: &str, tokens: &[Token]) -> Result<()> {
    let mut offset = 0;

    for token in tokens {
        if token.start != offset {
            return Err(ResegmentError::TokenGap {
                expected: offset,
                found: token.start,
            });
        }
        if text.get(token.start..token.end()) != Some(token.text.as_str()) {
            return Err(ResegmentError::TokenMismatch { start: token.start });
        }
        offset = token.end();
    }

    if offset != text.len() {
        return Err(ResegmentError::IncompleteCoverage {
            covered: offset,
            total: text.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{render, TokenCategory};

    #[test]
    fn test_simple_tokenization() {
        let tokens = UnicodeWordTokenizer::new().tokenize("go home, and");

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["go", " ", "home", ",", " ", "and"]);
        assert_eq!(tokens[3].category, TokenCategory::Punct);
        assert_eq!(tokens[5].start, 9);
    }

    #[test]
    fn test_lossless() {
        let text = "  Wenn du kommst, oder nicht…  ";
        let tokens = UnicodeWordTokenizer::new().tokenize(text);
        assert_eq!(render(&tokens), text);
        assert!(validate_coverage(text, &tokens).is_ok());
    }

    #[test]
    fn test_closure_tokenizer() {
        let whole = |text: &str| vec![Token::from_span(text, 0, text.len(), TokenCategory::Word)];
        let tokens = whole.tokenize("abc");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "abc");
    }

    #[test]
    fn test_validate_gap() {
        let text = "a b";
        let tokens = vec![
            Token::from_span(text, 0, 1, TokenCategory::Word),
            Token::from_span(text, 2, 1, TokenCategory::Word),
        ];
        assert!(matches!(
            validate_coverage(text, &tokens),
            Err(ResegmentError::TokenGap { expected: 1, found: 2 })
        ));
    }

    #[test]
    fn test_validate_mismatch() {
        let text = "a b";
        let tokens = vec![Token::with_text("x b".to_string(), 0, 3, TokenCategory::Word)];
        assert!(matches!(
            validate_coverage(text, &tokens),
            Err(ResegmentError::TokenMismatch { start: 0 })
        ));
    }

    #[test]
    fn test_validate_incomplete() {
        let text = "a b";
        let tokens = vec![Token::from_span(text, 0, 1, TokenCategory::Word)];
        assert!(matches!(
            validate_coverage(text, &tokens),
            Err(ResegmentError::IncompleteCoverage { covered: 1, total: 3 })
        ));
    }
}
