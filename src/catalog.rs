//! Item catalog: category labels and related-item suggestions.
//!
//! Both tables are static data embedded from `resources/catalog.toml`.
//! Lookups are case-insensitive and total - unknown items fall back to
//! [`DEFAULT_CATEGORY`] and an empty suggestion list.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Category reported for items the catalog does not know
pub const DEFAULT_CATEGORY: &str = "Other";

const BUILTIN_CATALOG: &str = include_str!("../resources/catalog.toml");

static SHARED: LazyLock<Catalog> = LazyLock::new(Catalog::builtin);

/// Catalog file structure (matches TOML)
#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogFile {
    /// Category label -> items in it
    #[serde(default)]
    categories: BTreeMap<String, Vec<String>>,
    /// Item -> related items
    #[serde(default)]
    suggestions: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: HashMap<String, String>,
    suggestions: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).context("Failed to parse catalog TOML")?;

        let categories = file
            .categories
            .into_iter()
            .flat_map(|(label, items)| {
                items
                    .into_iter()
                    .map(move |item| (item.to_lowercase(), label.clone()))
            })
            .collect();
        let suggestions = file
            .suggestions
            .into_iter()
            .map(|(item, related)| (item.to_lowercase(), related))
            .collect();

        Ok(Self {
            categories,
            suggestions,
        })
    }

    /// The embedded catalog; empty if it cannot be parsed
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_CATALOG).unwrap_or_else(|e| {
            log::warn!("Failed to parse built-in catalog: {:#}. Using empty catalog.", e);
            Self::default()
        })
    }

    pub fn shared() -> &'static Catalog {
        &SHARED
    }

    pub fn category_of(&self, item: &str) -> &str {
        self.categories
            .get(&item.to_lowercase())
            .map(String::as_str)
            .unwrap_or(DEFAULT_CATEGORY)
    }

    pub fn suggestions_for(&self, item: &str) -> Vec<&str> {
        self.suggestions
            .get(&item.to_lowercase())
            .map(|related| related.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}

/// Category of an item in the built-in catalog
pub fn category_of(item: &str) -> &'static str {
    Catalog::shared().category_of(item)
}

/// Related items from the built-in catalog
pub fn suggestions_for(item: &str) -> Vec<&'static str> {
    Catalog::shared().suggestions_for(item)
}
