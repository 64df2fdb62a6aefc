//! Session State
//!
//! One shopping list per session; each transcript becomes a `Response`.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::list::{ListChange, ListItem, ShoppingList};
use crate::parser::{CommandParser, Intent, ParsedCommand};

/// Reply for one transcript line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub transcript: String,
    pub command: ParsedCommand,
    pub change: ListChange,
    /// Category of the command's item, when there is one
    pub category: Option<String>,
    /// Related items, offered after additions
    pub suggestions: Vec<String>,
    pub list: Vec<ListItem>,
}

#[derive(Debug, Default)]
pub struct Session {
    list: ShoppingList,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    /// Parse a transcript and apply it to the session list
    pub fn handle(
        &mut self,
        parser: &CommandParser,
        catalog: &Catalog,
        transcript: &str,
    ) -> Response {
        let command = parser.parse(transcript);
        let change = self.list.apply(&command);

        let category = command
            .item
            .as_deref()
            .map(|item| catalog.category_of(item).to_string());

        let suggestions = match (&command.intent, command.item.as_deref()) {
            (Intent::Add, Some(item)) if matches!(change, ListChange::Added { .. }) => catalog
                .suggestions_for(item)
                .into_iter()
                .filter(|s| self.list.quantity_of(s).is_none())
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        log::info!("{:?} -> {} ({:?})", transcript, command, change);

        Response {
            transcript: transcript.to_string(),
            command,
            change,
            category,
            suggestions,
            list: self.list.items().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::parser::Quantity;

    fn parser() -> CommandParser {
        CommandParser::new(Lexicon::shared())
    }

    #[test]
    fn test_add_response() {
        let mut session = Session::new();
        let response = session.handle(&parser(), Catalog::shared(), "add 2 milk");

        assert_eq!(response.command.quantity, Quantity::Exact(2));
        assert_eq!(response.category.as_deref(), Some("Dairy"));
        assert_eq!(response.suggestions, vec!["bread", "butter"]);
        assert_eq!(response.list.len(), 1);
    }

    #[test]
    fn test_suggestions_skip_listed_items() {
        let mut session = Session::new();
        session.handle(&parser(), Catalog::shared(), "add bread");
        let response = session.handle(&parser(), Catalog::shared(), "add milk");
        assert_eq!(response.suggestions, vec!["butter"]);
    }

    #[test]
    fn test_no_suggestions_for_remove_or_noise() {
        let mut session = Session::new();
        session.handle(&parser(), Catalog::shared(), "add milk");

        let response = session.handle(&parser(), Catalog::shared(), "remove milk");
        assert!(response.suggestions.is_empty());
        assert!(session.list().is_empty());

        let response = session.handle(&parser(), Catalog::shared(), "please");
        assert_eq!(response.change, ListChange::Ignored);
        assert_eq!(response.category, None);
    }
}
