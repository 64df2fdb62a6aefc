//! Command Extraction
//!
//! Turns normalized text and its tokens into intent, quantity and item.

use std::sync::LazyLock;

use regex::Regex;

use super::command::{Intent, Quantity};
use super::lexer::{Token, TokenKind};
use crate::lexicon::Lexicon;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit run pattern is valid"));

/// Shortest accepted item name, in characters
const MIN_ITEM_CHARS: usize = 2;

/// How intent keywords are matched against a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordMatch {
    /// Keyword may appear anywhere, even inside a longer word
    #[default]
    Substring,
    /// Keyword must be a whole token
    Token,
}

/// Classify intent from keyword groups; the first group with a hit wins
pub fn classify_intent(
    normalized: &str,
    tokens: &[Token<'_>],
    lexicon: &Lexicon,
    mode: KeywordMatch,
) -> Intent {
    for (intent, keywords) in lexicon.intent_keywords() {
        let hit = match mode {
            KeywordMatch::Substring => keywords.iter().any(|k| normalized.contains(k.as_str())),
            KeywordMatch::Token => keywords
                .iter()
                .any(|k| tokens.iter().any(|t| t.text == k.as_str())),
        };
        if hit {
            return intent;
        }
    }
    Intent::Unknown
}

/// Extract the quantity.
///
/// Priority: an "all" token, then the first digit run, then the first
/// spelled-out number, then 1.
pub fn extract_quantity(normalized: &str, tokens: &[Token<'_>], lexicon: &Lexicon) -> Quantity {
    if tokens.iter().any(|t| lexicon.is_all_word(t.text)) {
        return Quantity::All;
    }

    if let Some(run) = DIGIT_RUN.find(normalized) {
        // Only overflow can fail here
        let value = run.as_str().parse::<u32>().unwrap_or(u32::MAX);
        return Quantity::Exact(value);
    }

    tokens
        .iter()
        .find_map(|t| match t.kind {
            TokenKind::NumberWord(value) => Some(Quantity::Exact(value)),
            _ => None,
        })
        .unwrap_or_default()
}

/// Pick the last surviving word as the item candidate
pub fn select_item<'a>(tokens: &[Token<'a>], lexicon: &Lexicon) -> Option<&'a str> {
    let candidate = tokens.iter().rev().find(|t| t.is_item_candidate())?.text;
    is_acceptable_item(candidate, lexicon).then_some(candidate)
}

/// Translate Hindi words, otherwise strip one plural "s"
pub fn normalize_item(candidate: &str, lexicon: &Lexicon) -> Option<String> {
    let item = match lexicon.translate(candidate) {
        Some(english) => english,
        None => candidate.strip_suffix('s').unwrap_or(candidate),
    };
    is_acceptable_item(item, lexicon).then(|| item.to_string())
}

fn is_acceptable_item(word: &str, lexicon: &Lexicon) -> bool {
    !lexicon.is_invalid_word(word)
        && !lexicon.is_stop_word(word)
        && word.chars().count() >= MIN_ITEM_CHARS
}
