//! Lexicon Schema Types
//!
//! TOML file layout for vocabulary tables, and the runtime `Lexicon`
//! built from it (sets and maps tuned for per-token lookups).

use serde::Deserialize;
use std::collections::{HashMap, HashSet};

use crate::parser::Intent;

/// Root lexicon file structure (matches TOML)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LexiconFile {
    #[serde(default)]
    pub lexicon: Option<LexiconMeta>,
    #[serde(default)]
    pub keywords: KeywordTable,
    #[serde(default)]
    pub filter: FilterTable,
    #[serde(default)]
    pub quantity: QuantityTable,
    #[serde(default)]
    pub numbers: HashMap<String, u32>,
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

/// Lexicon metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LexiconMeta {
    pub name: String,
    pub description: Option<String>,
}

/// Intent keywords, one list per intent
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct KeywordTable {
    #[serde(default)]
    pub add: Vec<String>,
    #[serde(default)]
    pub remove: Vec<String>,
    #[serde(default)]
    pub search: Vec<String>,
}

/// Words dropped before the item is picked
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FilterTable {
    #[serde(default)]
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub invalid_words: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct QuantityTable {
    /// Tokens meaning "every unit"
    #[serde(default)]
    pub all: Vec<String>,
}

/// Runtime lexicon (optimized for lookups)
///
/// Every entry is stored lowercased, since transcripts are lowercased
/// before they are matched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    pub name: String,
    pub description: Option<String>,
    add_keywords: Vec<String>,
    remove_keywords: Vec<String>,
    search_keywords: Vec<String>,
    stop_words: HashSet<String>,
    invalid_words: HashSet<String>,
    all_words: HashSet<String>,
    numbers: HashMap<String, u32>,
    translations: HashMap<String, String>,
}

impl From<LexiconFile> for Lexicon {
    fn from(file: LexiconFile) -> Self {
        let (name, description) = match file.lexicon {
            Some(meta) => (meta.name, meta.description),
            None => ("unnamed".to_string(), None),
        };

        Self {
            name,
            description,
            add_keywords: clean_list(file.keywords.add),
            remove_keywords: clean_list(file.keywords.remove),
            search_keywords: clean_list(file.keywords.search),
            stop_words: clean_list(file.filter.stop_words).into_iter().collect(),
            invalid_words: clean_list(file.filter.invalid_words).into_iter().collect(),
            all_words: clean_list(file.quantity.all).into_iter().collect(),
            numbers: file
                .numbers
                .into_iter()
                .filter_map(|(word, value)| clean_word(&word).map(|w| (w, value)))
                .collect(),
            translations: file
                .translations
                .into_iter()
                .filter_map(|(word, item)| Some((clean_word(&word)?, clean_word(&item)?)))
                .collect(),
        }
    }
}

impl Lexicon {
    /// Keyword groups in classification priority order
    pub fn intent_keywords(&self) -> [(Intent, &[String]); 3] {
        [
            (Intent::Add, &self.add_keywords),
            (Intent::Remove, &self.remove_keywords),
            (Intent::Search, &self.search_keywords),
        ]
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn is_invalid_word(&self, word: &str) -> bool {
        self.invalid_words.contains(word)
    }

    pub fn is_all_word(&self, word: &str) -> bool {
        self.all_words.contains(word)
    }

    /// Value of a spelled-out number ("three", "तीन")
    pub fn number_value(&self, word: &str) -> Option<u32> {
        self.numbers.get(word).copied()
    }

    /// Canonical English item for a Hindi word or transliteration
    pub fn translate(&self, word: &str) -> Option<&str> {
        self.translations.get(word).map(String::as_str)
    }

    pub fn translation_count(&self) -> usize {
        self.translations.len()
    }

    /// Extend this lexicon with another one.
    ///
    /// List and set entries are unioned; on map key conflicts `other` wins.
    pub fn merge(&mut self, other: Lexicon) {
        extend_unique(&mut self.add_keywords, other.add_keywords);
        extend_unique(&mut self.remove_keywords, other.remove_keywords);
        extend_unique(&mut self.search_keywords, other.search_keywords);
        self.stop_words.extend(other.stop_words);
        self.invalid_words.extend(other.invalid_words);
        self.all_words.extend(other.all_words);
        self.numbers.extend(other.numbers);
        self.translations.extend(other.translations);

        if self.name.is_empty() {
            self.name = other.name;
        } else {
            self.name = format!("{}+{}", self.name, other.name);
        }
    }
}

/// Lowercase and trim a word; empty words are dropped
fn clean_word(word: &str) -> Option<String> {
    let word = word.trim().to_lowercase();
    (!word.is_empty()).then_some(word)
}

fn clean_list(words: Vec<String>) -> Vec<String> {
    let mut cleaned = Vec::with_capacity(words.len());
    extend_unique(&mut cleaned, words.iter().filter_map(|w| clean_word(w)).collect());
    cleaned
}

fn extend_unique(target: &mut Vec<String>, words: Vec<String>) {
    for word in words {
        if !target.contains(&word) {
            target.push(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with_keywords(add: &[&str]) -> LexiconFile {
        LexiconFile {
            lexicon: Some(LexiconMeta {
                name: "test".to_string(),
                description: None,
            }),
            keywords: KeywordTable {
                add: add.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_lexicon_from_file_lowercases_entries() {
        let mut file = file_with_keywords(&["Add", " BUY "]);
        file.translations.insert("दूध".to_string(), "Milk".to_string());
        file.numbers.insert("Three".to_string(), 3);

        let lexicon = Lexicon::from(file);
        assert_eq!(lexicon.name, "test");
        assert_eq!(lexicon.intent_keywords()[0].1, ["add", "buy"]);
        assert_eq!(lexicon.translate("दूध"), Some("milk"));
        assert_eq!(lexicon.number_value("three"), Some(3));
    }

    #[test]
    fn test_empty_keywords_are_dropped() {
        let lexicon = Lexicon::from(file_with_keywords(&["", "  ", "add"]));
        assert_eq!(lexicon.intent_keywords()[0].1, ["add"]);
    }

    #[test]
    fn test_intent_keyword_order() {
        let lexicon = Lexicon::default();
        let order: Vec<Intent> = lexicon.intent_keywords().iter().map(|(i, _)| *i).collect();
        assert_eq!(order, vec![Intent::Add, Intent::Remove, Intent::Search]);
    }

    #[test]
    fn test_merge_unions_and_overrides() {
        let mut base = Lexicon::from(file_with_keywords(&["add"]));
        base.translations.insert("आम".to_string(), "mango".to_string());

        let mut extra_file = file_with_keywords(&["add", "get"]);
        extra_file.lexicon = Some(LexiconMeta {
            name: "extra".to_string(),
            description: None,
        });
        extra_file.translations.insert("आम".to_string(), "alphonso".to_string());
        extra_file.filter.stop_words = vec!["kindly".to_string()];

        base.merge(Lexicon::from(extra_file));

        assert_eq!(base.intent_keywords()[0].1, ["add", "get"]);
        assert_eq!(base.translate("आम"), Some("alphonso"));
        assert!(base.is_stop_word("kindly"));
        assert_eq!(base.name, "test+extra");
    }

    #[test]
    fn test_file_without_sections_parses() {
        let file: LexiconFile = toml::from_str("").unwrap();
        assert_eq!(file, LexiconFile::default());
    }
}
