//! In-Memory Basket Store
//!
//! Fixed table of baskets keyed by normalized code. Created once at startup,
//! lives for the process lifetime, never persisted.

use std::collections::BTreeMap;

use crate::domain::{normalize_key, Basket, DomainError, DomainResult, Entity};
use super::seed::sample_baskets;
use super::traits::BasketRepository;

/// Basket table held in memory
#[derive(Debug, Clone, Default)]
pub struct BasketStore {
    baskets: BTreeMap<String, Basket>,
}

impl BasketStore {
    pub fn new<I>(baskets: I) -> Self
    where
        I: IntoIterator<Item = Basket>,
    {
        Self {
            baskets: baskets
                .into_iter()
                .map(|basket| (basket.id().key(), basket))
                .collect(),
        }
    }

    /// Store pre-populated with the four sample baskets
    pub fn seeded() -> Self {
        Self::new(sample_baskets())
    }

    fn get_mut(&mut self, code: &str) -> DomainResult<&mut Basket> {
        self.baskets
            .get_mut(&normalize_key(code))
            .ok_or_else(|| not_found(code))
    }
}

fn not_found(code: &str) -> DomainError {
    DomainError::NotFound(format!("basket {}", code.trim()))
}

impl BasketRepository for BasketStore {
    fn lookup(&self, code: &str) -> DomainResult<Basket> {
        self.baskets
            .get(&normalize_key(code))
            .cloned()
            .ok_or_else(|| not_found(code))
    }

    fn list(&self) -> Vec<Basket> {
        self.baskets.values().cloned().collect()
    }

    fn add_item(&mut self, code: &str, item_name: String) -> DomainResult<Basket> {
        let basket = self.get_mut(code)?;
        basket.add_item(item_name);
        Ok(basket.clone())
    }

    fn remove_item(&mut self, code: &str, item_name: &str) -> DomainResult<Basket> {
        let basket = self.get_mut(code)?;
        if !basket.remove_item(item_name) {
            log::debug!("remove_item: {:?} not in basket {}", item_name, basket.code);
        }
        Ok(basket.clone())
    }
}
