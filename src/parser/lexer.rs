//! Transcript Lexer
//!
//! Normalizes a raw transcript and splits it into classified tokens.
//! Tokens borrow from the normalized text; no per-token allocation.

use crate::lexicon::Lexicon;

/// Punctuation that speech engines and typists sprinkle into transcripts
const STRIPPED_PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

/// Token types in a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Candidate item word
    Word,
    /// Verb, preposition or filler ("add", "please", "मुझे")
    StopWord,
    /// Spelled-out number with its value ("three", "तीन")
    NumberWord(u32),
    /// Anything containing an ASCII digit ("2", "2kg")
    ///
    /// Other scripts' digits (Devanagari "३") do not count, so such tokens
    /// stay `Word`s and can become the item.
    Numeric,
}

/// A token with its text content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl Token<'_> {
    /// Whether the token survives into item selection
    pub fn is_item_candidate(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Lowercase, strip `. , ! ?` and trim
pub fn normalize(transcript: &str) -> String {
    transcript
        .to_lowercase()
        .replace(STRIPPED_PUNCTUATION, "")
        .trim()
        .to_string()
}

/// Split normalized text on whitespace and classify each token
pub fn tokenize<'a>(normalized: &'a str, lexicon: &Lexicon) -> Vec<Token<'a>> {
    normalized
        .split_whitespace()
        .map(|text| Token {
            kind: classify(text, lexicon),
            text,
        })
        .collect()
}

fn classify(text: &str, lexicon: &Lexicon) -> TokenKind {
    if text.chars().any(|c| c.is_ascii_digit()) {
        TokenKind::Numeric
    } else if let Some(value) = lexicon.number_value(text) {
        TokenKind::NumberWord(value)
    } else if lexicon.is_stop_word(text) {
        TokenKind::StopWord
    } else {
        TokenKind::Word
    }
}
