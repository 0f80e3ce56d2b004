//! Trigger-word resegmentation.
//!
//! The resegmenter walks a token sequence and starts a new sentence in front
//! of every trigger word: the separator before the trigger (and a punctuation
//! run just before that) is dropped and replaced by `". "` plus the trigger
//! word with its first letter upper-cased.
//!
//! Two positions are exempt. A trigger that comes before any other word stays
//! where it is, and a trigger that is the last word of the text is glued back
//! onto the previous sentence with a plain space, keeping any punctuation
//! that follows it.

use crate::token::{render, Token, TokenCategory};
use crate::triggers::TriggerSet;

/// Text inserted in front of a trigger word
pub const BREAK_PREFIX: &str = ". ";

/// Output of a resegmentation pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resegmented {
    /// The rewritten token sequence
    pub tokens: Vec<Token>,
    /// Number of sentence breaks that were inserted
    pub breaks: usize,
}

impl Resegmented {
    /// Concatenate the tokens back into a string
    pub fn render(&self) -> String {
        render(&self.tokens)
    }
}

/// Inserts sentence breaks in front of trigger words
#[derive(Debug, Clone, Copy)]
pub struct Resegmenter<'t> {
    triggers: &'t TriggerSet,
}

impl<'t> Resegmenter<'t> {
    /// Create a resegmenter for one language's trigger set
    pub fn new(triggers: &'t TriggerSet) -> Self {
        Resegmenter { triggers }
    }

    /// Check whether a token's whole text is a trigger word
    pub fn is_trigger(&self, token: &Token) -> bool {
        self.triggers.contains(&token.text)
    }

    /// Rewrite a token sequence and render it
    pub fn resegment(&self, tokens: Vec<Token>) -> String {
        self.resegment_tokens(tokens).render()
    }

    /// Rewrite a token sequence
    pub fn resegment_tokens(&self, tokens: Vec<Token>) -> Resegmented {
        if self.triggers.is_empty() {
            return Resegmented { tokens, breaks: 0 };
        }

        let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
        let mut last_word: Option<Token> = None;
        let mut last_break: Option<usize> = None;
        let mut breaks = 0;

        for token in tokens {
            // Nothing before the first word can be broken off
            if last_word.is_none() {
                if token.is_word() {
                    last_word = Some(token.clone());
                }
                out.push(token);
                continue;
            }

            if self.is_trigger(&token) {
                pop_if(&mut out, TokenCategory::Whitespace);
                pop_if(&mut out, TokenCategory::Punct);
                last_break = Some(out.len());
                out.push(break_token(&token));
                last_word = Some(token);
                breaks += 1;
                continue;
            }

            if token.is_word() {
                last_word = Some(token.clone());
            }
            out.push(token);
        }

        if breaks > 0 {
            pop_if(&mut out, TokenCategory::Whitespace);

            // A trailing trigger rejoins the sentence it would have split off
            // from. Only punctuation, whitespace or symbols can follow it.
            let trailing = last_word.filter(|w| self.is_trigger(w));
            if let (Some(word), Some(index)) = (trailing, last_break) {
                let own_break = out
                    .get(index)
                    .map_or(false, |t| t.is_break() && t.start == word.start);
                if own_break {
                    let space =
                        Token::with_text(" ".to_string(), word.start, 0, TokenCategory::Whitespace);
                    out[index] = space;
                    out.insert(index + 1, word);
                    breaks -= 1;
                }
            }
        }

        Resegmented { tokens: out, breaks }
    }
}

fn pop_if(out: &mut Vec<Token>, category: TokenCategory) {
    if out.last().map_or(false, |t| t.category == category) {
        out.pop();
    }
}

/// Build the synthetic token that replaces a trigger word
fn break_token(trigger: &Token) -> Token {
    let mut text = String::with_capacity(BREAK_PREFIX.len() + trigger.text.len() + 2);
    text.push_str(BREAK_PREFIX);
    text.push_str(&capitalize_first(&trigger.text));
    Token::with_text(text, trigger.start, trigger.len, TokenCategory::Break)
}

/// Upper-case the first character and keep the rest as written
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
