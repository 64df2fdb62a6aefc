//! Voice Shopping List
//!
//! Rule-based parsing of short shopping commands ("add 2 milk",
//! "दो दूध जोड़ो") into structured intents.
//!
//! This library provides:
//! - The command parser and its bilingual lexicon
//! - Category and suggestion lookups
//! - An in-memory shopping list that applies parsed commands
//! - A JSON-lines stdio service with lexicon hot reload

pub mod catalog;
pub mod config;
pub mod lexicon;
pub mod list;
pub mod parser;
pub mod service;

// Re-exports for the public API
pub use catalog::{Catalog, category_of, suggestions_for};
pub use config::Config;
pub use lexicon::Lexicon;
pub use list::{ListChange, ListItem, ShoppingList};
pub use parser::{CommandParser, Intent, ParsedCommand, Quantity, parse_command};
