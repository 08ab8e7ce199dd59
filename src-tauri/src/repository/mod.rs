//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod seed;
mod basket_store;


pub use traits::BasketRepository;
pub use seed::sample_baskets;
pub use basket_store::BasketStore;
