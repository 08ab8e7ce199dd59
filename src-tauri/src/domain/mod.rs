//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod code;
mod basket;

pub use entity::{Entity, DomainError, DomainResult};
pub use code::{BasketCode, CodeSource, normalize_key};
pub use basket::{Basket, BasketStatus, validate_item_name};
