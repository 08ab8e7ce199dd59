//! Basket Entity
//!
//! A basket is a coded container with an ordered list of item names. Its
//! status follows the item list: adding makes it full, emptying it makes it
//! empty again.

use serde::{Deserialize, Serialize};
use super::code::BasketCode;
use super::entity::{DomainError, DomainResult, Entity};

/// Basket occupancy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BasketStatus {
    #[default]
    Empty,
    Full,
    /// Only ever seeded; no operation moves a basket into or out of it
    InUse,
}

/// A basket record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    /// Unique code, as printed on the basket
    pub code: BasketCode,
    /// Current status
    pub status: BasketStatus,
    /// Item names in insertion order (duplicates allowed)
    pub items: Vec<String>,
}

impl Basket {
    /// Create an empty basket
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: BasketCode::new(code),
            status: BasketStatus::Empty,
            items: Vec::new(),
        }
    }

    /// Create a basket with a given status and contents (seed data)
    pub fn with_items<I, S>(code: impl Into<String>, status: BasketStatus, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            code: BasketCode::new(code),
            status,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item. The name must already be validated as non-blank.
    pub fn add_item(&mut self, name: String) {
        self.items.push(name);
        self.status = BasketStatus::Full;
    }

    /// Remove the first item equal to `name`.
    ///
    /// Returns whether anything was removed. A missing name leaves both the
    /// items and the status untouched.
    pub fn remove_item(&mut self, name: &str) -> bool {
        let Some(index) = self.items.iter().position(|item| item == name) else {
            return false;
        };
        self.items.remove(index);
        if self.items.is_empty() {
            self.status = BasketStatus::Empty;
        }
        true
    }
}

impl Entity for Basket {
    type Id = BasketCode;

    fn id(&self) -> Self::Id {
        self.code.clone()
    }
}

/// Reject blank item names before they reach a basket.
pub fn validate_item_name(name: &str) -> DomainResult<String> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidInput("item name is blank".to_string()));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basket_creation() {
        let basket = Basket::new("SEPET009");
        assert_eq!(basket.id(), BasketCode::new("SEPET009"));
        assert_eq!(basket.status, BasketStatus::Empty);
        assert!(basket.is_empty());
    }

    #[test]
    fn test_add_item_marks_full() {
        let mut basket = Basket::with_items("SEPET003", BasketStatus::InUse, ["Süt"]);
        basket.add_item("Peynir".to_string());
        assert_eq!(basket.status, BasketStatus::Full);
        assert_eq!(basket.items, vec!["Süt", "Peynir"]);
    }

    #[test]
    fn test_remove_first_duplicate_only() {
        let mut basket = Basket::with_items("SEPET001", BasketStatus::Full, ["Elma", "Ekmek", "Elma"]);
        assert!(basket.remove_item("Elma"));
        assert_eq!(basket.items, vec!["Ekmek", "Elma"]);
        assert_eq!(basket.status, BasketStatus::Full);
    }

    #[test]
    fn test_remove_last_item_marks_empty() {
        let mut basket = Basket::with_items("SEPET003", BasketStatus::InUse, ["Süt"]);
        assert!(basket.remove_item("Süt"));
        assert!(basket.is_empty());
        assert_eq!(basket.status, BasketStatus::Empty);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut basket = Basket::with_items("SEPET003", BasketStatus::InUse, ["Süt"]);
        assert!(!basket.remove_item("Ekmek"));
        assert_eq!(basket.items, vec!["Süt"]);
        assert_eq!(basket.status, BasketStatus::InUse);
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name("").is_err());
        assert_eq!(validate_item_name(" Süt").unwrap(), " Süt");
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&BasketStatus::InUse).unwrap(), "\"in_use\"");
        let parsed: BasketStatus = serde_json::from_str("\"full\"").unwrap();
        assert_eq!(parsed, BasketStatus::Full);
    }
}
