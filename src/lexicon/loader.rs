//! Lexicon Loading
//!
//! Built-in vocabulary is embedded in the binary; user files are merged on
//! top of it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use anyhow::{Context, Result};

use super::schema::{Lexicon, LexiconFile};

const BUILTIN_LEXICON: &str = include_str!("../../resources/lexicon/builtin.toml");

static SHARED: LazyLock<Arc<Lexicon>> = LazyLock::new(|| Arc::new(Lexicon::builtin()));

impl Lexicon {
    /// Parse lexicon content from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: LexiconFile = toml::from_str(content).context("Failed to parse lexicon TOML")?;
        Ok(Self::from(file))
    }

    /// Load a lexicon file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid lexicon file: {}", path.display()))
    }

    /// The embedded English/Hindi lexicon
    pub fn builtin() -> Self {
        match Self::from_toml_str(BUILTIN_LEXICON) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                log::warn!(
                    "Failed to parse built-in lexicon: {:#}. Using minimal fallback.",
                    e
                );
                Self::minimal()
            }
        }
    }

    /// Process-wide built-in lexicon, parsed on first use
    pub fn shared() -> Arc<Lexicon> {
        SHARED.clone()
    }

    /// Built-in lexicon extended with an optional user file
    pub fn with_user_file(path: Option<&Path>) -> Result<Self> {
        let mut lexicon = (*Self::shared()).clone();
        if let Some(path) = path {
            let user = Self::load(path)?;
            log::info!("Merged lexicon '{}' from {}", user.name, path.display());
            lexicon.merge(user);
        }
        Ok(lexicon)
    }

    /// English-only fallback in case the embedded TOML is unusable
    fn minimal() -> Self {
        use super::schema::{FilterTable, KeywordTable, LexiconMeta, QuantityTable};

        let words = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let numbers = [
            "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        ]
        .iter()
        .zip(1..)
        .map(|(word, value)| (word.to_string(), value))
        .collect();

        Self::from(LexiconFile {
            lexicon: Some(LexiconMeta {
                name: "minimal-fallback".to_string(),
                description: Some("English-only fallback lexicon".to_string()),
            }),
            keywords: KeywordTable {
                add: words(&["add", "buy", "need"]),
                remove: words(&["remove", "delete"]),
                search: words(&["find", "search", "show"]),
            },
            filter: FilterTable {
                stop_words: words(&[
                    "add", "remove", "delete", "buy", "need", "want", "to", "my", "list",
                    "from", "the", "please",
                ]),
                invalid_words: words(&["and", "the", "a", "to", "for"]),
            },
            quantity: QuantityTable {
                all: words(&["all"]),
            },
            numbers,
            translations: Default::default(),
        })
    }
}

/// Default location of the user lexicon: `<config_dir>/shoplist/lexicon.toml`
pub fn user_lexicon_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shoplist").join("lexicon.toml"))
}
