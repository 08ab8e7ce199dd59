//! Repository Layer - Core Traits
//!
//! Abstract interface for basket data access. The only implementation is
//! the in-memory `BasketStore`; lookups and mutations are synchronous.

use crate::domain::{Basket, DomainResult};

/// Lookup and item mutations over a table of baskets
pub trait BasketRepository: Send + Sync {
    /// Find a basket by code, ignoring case and surrounding whitespace
    fn lookup(&self, code: &str) -> DomainResult<Basket>;

    /// All baskets, ordered by code
    fn list(&self) -> Vec<Basket>;

    /// Append an item and mark the basket full
    fn add_item(&mut self, code: &str, item_name: String) -> DomainResult<Basket>;

    /// Remove the first matching item; empty the status if nothing is left
    fn remove_item(&mut self, code: &str, item_name: &str) -> DomainResult<Basket>;
}
