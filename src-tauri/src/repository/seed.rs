//! Sample basket data loaded at startup

use crate::domain::{Basket, BasketStatus};

pub fn sample_baskets() -> Vec<Basket> {
    vec![
        Basket::with_items("SEPET001", BasketStatus::Full, ["Elma", "Ekmek"]),
        Basket::new("SEPET002"),
        Basket::with_items("SEPET003", BasketStatus::InUse, ["Süt"]),
        Basket::new("SEPET004"),
    ]
}
