//! Command Vocabulary
//!
//! Keyword, stop word, number and translation tables that drive the parser,
//! kept as data rather than branching code.

pub mod loader;
pub mod schema;

pub use loader::user_lexicon_path;
pub use schema::{Lexicon, LexiconFile};
