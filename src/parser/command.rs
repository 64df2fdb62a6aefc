//! Parsed Command Types
//!
//! Minimal types representing a parsed shopping command.
//! No list or lookup logic here - pure data representation.

use serde::{Serialize, Serializer};
use std::fmt;

/// The action a command asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Add,
    Remove,
    Search,
    Unknown,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::Add => "add",
            Intent::Remove => "remove",
            Intent::Search => "search",
            Intent::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// How many units a command refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// An explicit count ("2 milk", "three eggs")
    Exact(u32),
    /// Every unit currently on the list ("remove all rice")
    All,
}

impl Quantity {
    /// Integer view of the quantity; `All` maps to `u64::MAX`
    pub fn as_u64(self) -> u64 {
        match self {
            Quantity::Exact(n) => u64::from(n),
            Quantity::All => u64::MAX,
        }
    }

    pub fn is_all(self) -> bool {
        matches!(self, Quantity::All)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Exact(1)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Exact(n) => write!(f, "{}", n),
            Quantity::All => f.write_str("all"),
        }
    }
}

/// Numbers stay numbers in JSON; the sentinel becomes `"all"`
impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Quantity::Exact(n) => serializer.serialize_u32(*n),
            Quantity::All => serializer.serialize_str("all"),
        }
    }
}

/// A transcript turned into a structured command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedCommand {
    pub intent: Intent,
    /// Canonical item name (lowercase, singular, English)
    pub item: Option<String>,
    pub quantity: Quantity,
}

impl ParsedCommand {
    /// The result for anything that could not be understood
    pub fn unknown() -> Self {
        Self {
            intent: Intent::Unknown,
            item: None,
            quantity: Quantity::Exact(0),
        }
    }

    /// Callers treat commands without an item as no-ops
    pub fn is_actionable(&self) -> bool {
        self.item.is_some()
    }
}

impl fmt::Display for ParsedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.item {
            Some(item) => write!(f, "{} {} {}", self.intent, self.quantity, item),
            None => write!(f, "{}", self.intent),
        }
    }
}
