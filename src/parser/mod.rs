//! Command Parser
//!
//! Deterministic text-to-intent pipeline for shopping commands:
//! normalize, classify intent, extract quantity, pick and normalize the item.
//! Pure functions over an immutable lexicon - no state, no I/O.

pub mod command;
pub mod extract;
pub mod lexer;

use std::sync::{Arc, LazyLock};

pub use command::{Intent, ParsedCommand, Quantity};
pub use extract::KeywordMatch;
pub use lexer::{Token, TokenKind, normalize, tokenize};

use crate::lexicon::Lexicon;

static DEFAULT_PARSER: LazyLock<CommandParser> =
    LazyLock::new(|| CommandParser::new(Lexicon::shared()));

/// Parse a transcript with the built-in lexicon
///
/// This is the main entry point. It never fails: anything it cannot make
/// sense of comes back as [`ParsedCommand::unknown`].
pub fn parse_command(transcript: &str) -> ParsedCommand {
    DEFAULT_PARSER.parse(transcript)
}

/// Parser bound to a particular lexicon
#[derive(Debug, Clone)]
pub struct CommandParser {
    lexicon: Arc<Lexicon>,
    keyword_match: KeywordMatch,
}

impl CommandParser {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            keyword_match: KeywordMatch::default(),
        }
    }

    pub fn with_keyword_match(mut self, keyword_match: KeywordMatch) -> Self {
        self.keyword_match = keyword_match;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn keyword_match(&self) -> KeywordMatch {
        self.keyword_match
    }

    /// Parse a single transcript into a command
    pub fn parse(&self, transcript: &str) -> ParsedCommand {
        let normalized = lexer::normalize(transcript);
        let tokens = lexer::tokenize(&normalized, &self.lexicon);

        let intent =
            extract::classify_intent(&normalized, &tokens, &self.lexicon, self.keyword_match);
        let quantity = extract::extract_quantity(&normalized, &tokens, &self.lexicon);

        let item = extract::select_item(&tokens, &self.lexicon)
            .and_then(|candidate| extract::normalize_item(candidate, &self.lexicon));

        let Some(item) = item else {
            log::debug!("No item in transcript {:?}", transcript);
            return ParsedCommand::unknown();
        };

        let command = ParsedCommand {
            intent,
            item: Some(item),
            quantity,
        };
        log::debug!("Parsed {:?} as '{}'", transcript, command);
        command
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(intent: Intent, item: &str, quantity: Quantity) -> ParsedCommand {
        ParsedCommand {
            intent,
            item: Some(item.to_string()),
            quantity,
        }
    }

    #[test]
    fn test_parse_add_with_digits() {
        assert_eq!(
            parse_command("add 2 milk"),
            command(Intent::Add, "milk", Quantity::Exact(2))
        );
    }

    #[test]
    fn test_parse_remove_default_quantity() {
        assert_eq!(
            parse_command("remove bread"),
            command(Intent::Remove, "bread", Quantity::Exact(1))
        );
    }

    #[test]
    fn test_parse_search_strips_plural() {
        assert_eq!(
            parse_command("find apples"),
            command(Intent::Search, "apple", Quantity::Exact(1))
        );
    }

    #[test]
    fn test_parse_spelled_number() {
        assert_eq!(
            parse_command("buy three eggs"),
            command(Intent::Add, "egg", Quantity::Exact(3))
        );
    }

    #[test]
    fn test_parse_remove_all() {
        assert_eq!(
            parse_command("remove all rice"),
            command(Intent::Remove, "rice", Quantity::All)
        );
    }

    #[test]
    fn test_parse_empty_and_stop_words() {
        assert_eq!(parse_command(""), ParsedCommand::unknown());
        assert_eq!(parse_command("please"), ParsedCommand::unknown());
        assert_eq!(parse_command("add to my list please"), ParsedCommand::unknown());
    }

    #[test]
    fn test_parse_hindi_word_order() {
        assert_eq!(
            parse_command("दो दूध जोड़ो"),
            command(Intent::Add, "milk", Quantity::Exact(2))
        );
        assert_eq!(
            parse_command("मेरी सूची से केला हटाओ"),
            command(Intent::Remove, "banana", Quantity::Exact(1))
        );
    }

    #[test]
    fn test_parse_item_without_intent() {
        // An item with no keyword is kept; callers decide what to do with it
        assert_eq!(
            parse_command("milk"),
            command(Intent::Unknown, "milk", Quantity::Exact(1))
        );
    }

    #[test]
    fn test_parse_devanagari_digits_are_plain_text() {
        // Only ASCII digits are quantities
        assert_eq!(
            parse_command("add ३३"),
            command(Intent::Add, "३३", Quantity::Exact(1))
        );
    }

    #[test]
    fn test_token_keyword_match() {
        let parser =
            CommandParser::new(Lexicon::shared()).with_keyword_match(KeywordMatch::Token);
        assert_eq!(parser.keyword_match(), KeywordMatch::Token);
        assert_eq!(parser.parse("showers gel").intent, Intent::Unknown);
        assert_eq!(parser.parse("show gel").intent, Intent::Search);
    }

    #[test]
    fn test_parser_with_custom_lexicon() {
        let mut lexicon = Lexicon::builtin();
        lexicon.merge(
            Lexicon::from_toml_str(
                r#"
[lexicon]
name = "extra"

[keywords]
add = ["get"]

[translations]
"tamatar" = "tomato"
"#,
            )
            .unwrap(),
        );
        let parser = CommandParser::new(Arc::new(lexicon));
        assert_eq!(
            parser.parse("get 4 tamatar"),
            command(Intent::Add, "tomato", Quantity::Exact(4))
        );
        assert_eq!(parser.lexicon().name, "builtin+extra");
    }
}
