//! Character classification.
//!
//! This module assigns every character a coarse category (letter, digit,
//! whitespace, punctuation, symbol) and derives the category of a whole
//! segment from the categories of its characters.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::token::TokenCategory;

/// Character categories used when classifying segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharCategory {
    /// Alphabetic character or combining mark
    Letter,
    /// Numeric character
    Digit,
    /// Space-like character
    Whitespace,
    /// Punctuation mark
    Punct,
    /// Currency, math and other symbols
    Symbol,
    /// Anything else (emoji, control characters, ...)
    #[default]
    Other,
}

impl CharCategory {
    /// Parse a category string from the CSV file
    fn from_str(s: &str) -> Self {
        match s.trim() {
            "PUNCT" => CharCategory::Punct,
            "SYMBOL" => CharCategory::Symbol,
            _ => CharCategory::Other,
        }
    }

    /// Check if this category can be part of a word
    pub fn is_word_part(&self) -> bool {
        matches!(self, CharCategory::Letter | CharCategory::Digit)
    }
}

/// Embedded table of non-ASCII punctuation and symbols
static PUNCT_TABLE: &str = include_str!("data/punct_table.csv");

/// Lazily initialized map from character to category
static CHAR_MAP: Lazy<HashMap<char, CharCategory>> = Lazy::new(|| {
    let mut map = HashMap::new();

    for line in PUNCT_TABLE.lines().skip(1) {
        let parts: Vec<&str> = line.split(',').collect();
        if parts.len() >= 3 {
            if let Ok(code_point) = u32::from_str_radix(parts[0].trim(), 16) {
                if let Some(c) = char::from_u32(code_point) {
                    map.insert(c, CharCategory::from_str(parts[2]));
                }
            }
        }
    }

    map
});

/// Characters treated as whitespace on top of `char::is_whitespace`
const INVISIBLE_SPACES: &[char] = &[
    '\u{180E}', // MONGOLIAN VOWEL SEPARATOR
    '\u{200B}', // ZERO WIDTH SPACE
    '\u{2060}', // WORD JOINER
    '\u{FEFF}', // ZERO WIDTH NO-BREAK SPACE
];

/// ASCII punctuation that reads as a symbol rather than as sentence punctuation
const ASCII_SYMBOLS: &[char] = &['#', '$', '%', '&', '+', '<', '=', '>', '^', '`', '|', '~'];

/// Get the category of a character
pub fn get_char_category(c: char) -> CharCategory {
    if c.is_whitespace() || INVISIBLE_SPACES.contains(&c) {
        return CharCategory::Whitespace;
    }

    if c.is_ascii_punctuation() {
        if ASCII_SYMBOLS.contains(&c) {
            return CharCategory::Symbol;
        }
        return CharCategory::Punct;
    }

    if let Some(cat) = CHAR_MAP.get(&c) {
        return *cat;
    }

    if c.is_alphabetic() {
        return CharCategory::Letter;
    }

    if c.is_numeric() {
        return CharCategory::Digit;
    }

    // Combining diacritical marks belong to the letter they follow
    if ('\u{0300}'..='\u{036F}').contains(&c) || ('\u{1AB0}'..='\u{1AFF}').contains(&c) {
        return CharCategory::Letter;
    }

    CharCategory::Other
}

/// Classify a segment of text as a whole.
///
/// A segment containing any letter or digit is a word. A segment made only of
/// whitespace, or only of punctuation, gets that category. Anything else
/// (including the empty string) is `Other`.
pub fn classify_segment(segment: &str) -> TokenCategory {
    if segment.is_empty() {
        return TokenCategory::Other;
    }

    let mut all_space = true;
    let mut all_punct = true;

    for c in segment.chars() {
        let cat = get_char_category(c);
        if cat.is_word_part() {
            return TokenCategory::Word;
        }
        all_space &= cat == CharCategory::Whitespace;
        all_punct &= cat == CharCategory::Punct;
    }

    if all_space {
        TokenCategory::Whitespace
    } else if all_punct {
        TokenCategory::Punct
    } else {
        TokenCategory::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        assert_eq!(get_char_category('a'), CharCategory::Letter);
        assert_eq!(get_char_category('Z'), CharCategory::Letter);
        assert_eq!(get_char_category('ñ'), CharCategory::Letter);
        assert_eq!(get_char_category('ß'), CharCategory::Letter);
        assert_eq!(get_char_category('и'), CharCategory::Letter);
    }

    #[test]
    fn test_digits() {
        assert_eq!(get_char_category('7'), CharCategory::Digit);
    }

    #[test]
    fn test_space() {
        assert_eq!(get_char_category(' '), CharCategory::Whitespace);
        assert_eq!(get_char_category('\t'), CharCategory::Whitespace);
        assert_eq!(get_char_category('\n'), CharCategory::Whitespace);
        assert_eq!(get_char_category('\u{00A0}'), CharCategory::Whitespace);
        assert_eq!(get_char_category('\u{200B}'), CharCategory::Whitespace);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(get_char_category(','), CharCategory::Punct);
        assert_eq!(get_char_category('.'), CharCategory::Punct);
        assert_eq!(get_char_category('¿'), CharCategory::Punct);
        assert_eq!(get_char_category('…'), CharCategory::Punct);
        assert_eq!(get_char_category('«'), CharCategory::Punct);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(get_char_category('$'), CharCategory::Symbol);
        assert_eq!(get_char_category('€'), CharCategory::Symbol);
        assert_eq!(get_char_category('😀'), CharCategory::Other);
    }

    #[test]
    fn test_classify_segment() {
        assert_eq!(classify_segment("and"), TokenCategory::Word);
        assert_eq!(classify_segment("don't"), TokenCategory::Word);
        assert_eq!(classify_segment("42"), TokenCategory::Word);
        assert_eq!(classify_segment("  "), TokenCategory::Whitespace);
        assert_eq!(classify_segment(",."), TokenCategory::Punct);
        assert_eq!(classify_segment("$"), TokenCategory::Other);
        assert_eq!(classify_segment(""), TokenCategory::Other);
    }
}
