//! Chunking of text into categorized segments.
//!
//! The text is cut on Unicode (UAX #29) word boundaries, each segment is
//! classified, and adjacent whitespace or punctuation segments are merged into
//! a single run. The resulting chunks cover the input exactly.

use unicode_segmentation::UnicodeSegmentation;

use crate::char_categories::classify_segment;
use crate::token::TokenCategory;

/// A chunk of text with its category and position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The category of this chunk
    pub category: TokenCategory,
    /// Starting byte offset in the original string
    pub start: usize,
    /// Length in bytes
    pub len: usize,
}

impl Chunk {
    /// Create a new chunk
    pub fn new(category: TokenCategory, start: usize, len: usize) -> Self {
        Chunk {
            category,
            start,
            len,
        }
    }

    /// Byte offset just past the end of this chunk
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Chunker for mixed-script text
pub struct Chunker<'a> {
    text: &'a str,
}

impl<'a> Chunker<'a> {
    /// Create a new chunker for the given string
    pub fn new(text: &'a str) -> Self {
        Chunker { text }
    }

    /// Chunk the text into words, punctuation runs, whitespace runs and others
    pub fn make_chunks(&self) -> Vec<Chunk> {
        let mut chunks: Vec<Chunk> = Vec::new();

        for (start, segment) in self.text.split_word_bound_indices() {
            let category = classify_segment(segment);

            if let Some(last) = chunks.last_mut() {
                if last.category == category && Self::is_run(category) && last.end() == start {
                    last.len += segment.len();
                    continue;
                }
            }

            chunks.push(Chunk::new(category, start, segment.len()));
        }

        chunks
    }

    /// Categories whose adjacent segments are merged into one chunk
    fn is_run(category: TokenCategory) -> bool {
        matches!(category, TokenCategory::Whitespace | TokenCategory::Punct)
    }
}
