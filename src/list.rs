//! In-memory shopping list driven by parsed commands.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::parser::{Intent, ParsedCommand, Quantity};

/// One line on the shopping list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub name: String,
    pub quantity: u32,
}

/// What applying a command did to the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListChange {
    /// New entry, or more units of an existing one
    Added { name: String, total: u32 },
    /// Some units taken off; the entry stays
    Decreased { name: String, remaining: u32 },
    /// Entry dropped from the list
    Removed { name: String },
    /// Entries matching a search
    Found { items: Vec<ListItem> },
    /// Remove for an item that is not on the list
    NotFound { name: String },
    /// No item, no intent, or nothing sensible to do
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShoppingList {
    items: Vec<ListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in insertion order
    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn quantity_of(&self, name: &str) -> Option<u32> {
        self.items
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.quantity)
    }

    /// Apply a parsed command
    pub fn apply(&mut self, command: &ParsedCommand) -> ListChange {
        let Some(name) = command.item.as_deref() else {
            return ListChange::Ignored;
        };

        match command.intent {
            Intent::Add => self.add(name, command.quantity),
            Intent::Remove => self.remove(name, command.quantity),
            Intent::Search => ListChange::Found {
                items: self.search(name).into_iter().cloned().collect(),
            },
            Intent::Unknown => ListChange::Ignored,
        }
    }

    /// Entries whose name contains `query`
    pub fn search(&self, query: &str) -> Vec<&ListItem> {
        self.items
            .iter()
            .filter(|i| i.name.contains(query))
            .collect()
    }

    /// Entries grouped by catalog category, labels in sorted order
    pub fn grouped<'a>(&'a self, catalog: &'a Catalog) -> BTreeMap<&'a str, Vec<&'a ListItem>> {
        let mut groups: BTreeMap<&str, Vec<&ListItem>> = BTreeMap::new();
        for item in &self.items {
            groups
                .entry(catalog.category_of(&item.name))
                .or_default()
                .push(item);
        }
        groups
    }

    fn add(&mut self, name: &str, quantity: Quantity) -> ListChange {
        let amount = match quantity {
            Quantity::Exact(0) | Quantity::All => {
                log::debug!("Nothing to add for '{}' ({})", name, quantity);
                return ListChange::Ignored;
            }
            Quantity::Exact(n) => n,
        };

        let total = match self.items.iter_mut().find(|i| i.name == name) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(amount);
                existing.quantity
            }
            None => {
                self.items.push(ListItem {
                    name: name.to_string(),
                    quantity: amount,
                });
                amount
            }
        };

        ListChange::Added {
            name: name.to_string(),
            total,
        }
    }

    fn remove(&mut self, name: &str, quantity: Quantity) -> ListChange {
        let Some(index) = self.items.iter().position(|i| i.name == name) else {
            return ListChange::NotFound {
                name: name.to_string(),
            };
        };

        let remaining = match quantity {
            Quantity::All => 0,
            Quantity::Exact(n) => self.items[index].quantity.saturating_sub(n),
        };

        if remaining == 0 {
            self.items.remove(index);
            ListChange::Removed {
                name: name.to_string(),
            }
        } else {
            self.items[index].quantity = remaining;
            ListChange::Decreased {
                name: name.to_string(),
                remaining,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_command;

    #[test]
    fn test_add_merges_quantities() {
        let mut list = ShoppingList::new();
        list.apply(&parse_command("add 2 milk"));
        let change = list.apply(&parse_command("buy three milk"));

        assert_eq!(
            change,
            ListChange::Added {
                name: "milk".to_string(),
                total: 5
            }
        );
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.quantity_of("milk"), Some(5));
    }

    #[test]
    fn test_add_saturates() {
        let mut list = ShoppingList::new();
        list.apply(&parse_command("add 4294967295 milk"));
        list.apply(&parse_command("add 10 milk"));
        assert_eq!(list.quantity_of("milk"), Some(u32::MAX));
    }

    #[test]
    fn test_add_all_and_zero_are_ignored() {
        let mut list = ShoppingList::new();
        assert_eq!(list.apply(&parse_command("add all milk")), ListChange::Ignored);
        assert_eq!(list.apply(&parse_command("add 0 milk")), ListChange::Ignored);
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_all_drops_entry() {
        let mut list = ShoppingList::new();
        list.apply(&parse_command("add 7 rice"));
        assert_eq!(
            list.apply(&parse_command("remove all rice")),
            ListChange::Removed {
                name: "rice".to_string()
            }
        );
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_partial_and_overdraw() {
        let mut list = ShoppingList::new();
        list.apply(&parse_command("add 5 eggs"));
        assert_eq!(
            list.apply(&parse_command("remove 2 eggs")),
            ListChange::Decreased {
                name: "egg".to_string(),
                remaining: 3
            }
        );
        assert_eq!(
            list.apply(&parse_command("remove 10 eggs")),
            ListChange::Removed {
                name: "egg".to_string()
            }
        );
    }

    #[test]
    fn test_remove_missing_item() {
        let mut list = ShoppingList::new();
        assert_eq!(
            list.apply(&parse_command("remove bread")),
            ListChange::NotFound {
                name: "bread".to_string()
            }
        );
    }

    #[test]
    fn test_search_and_ignored() {
        let mut list = ShoppingList::new();
        list.apply(&parse_command("add 2 apples"));
        list.apply(&parse_command("add bread"));

        match list.apply(&parse_command("find apples")) {
            ListChange::Found { items } => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].name, "apple");
                assert_eq!(items[0].quantity, 2);
            }
            other => panic!("Expected Found, got {:?}", other),
        }

        assert_eq!(list.apply(&parse_command("")), ListChange::Ignored);
        assert_eq!(list.apply(&parse_command("bread")), ListChange::Ignored);
        assert_eq!(list.items().len(), 2);
    }

    #[test]
    fn test_grouped_by_category() {
        let mut list = ShoppingList::new();
        list.apply(&parse_command("add milk"));
        list.apply(&parse_command("add bread"));
        list.apply(&parse_command("add 2 butter"));
        list.apply(&parse_command("add paneer"));

        let groups = list.grouped(Catalog::shared());
        let labels: Vec<&str> = groups.keys().copied().collect();
        assert_eq!(labels, vec!["Bakery", "Dairy", "Other"]);
        assert_eq!(groups["Dairy"].len(), 2);
    }

    #[test]
    fn test_change_json() {
        let change = ListChange::Decreased {
            name: "egg".to_string(),
            remaining: 3,
        };
        assert_eq!(
            serde_json::to_value(&change).unwrap(),
            serde_json::json!({"kind": "decreased", "name": "egg", "remaining": 3})
        );
    }
}
