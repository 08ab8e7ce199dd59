//! Basket Session
//!
//! Owns the basket table together with the navigator and produces the
//! `ScreenView` snapshot the frontend renders after every change.

use serde::{Deserialize, Serialize};

use crate::domain::{validate_item_name, Basket, CodeSource, DomainError, DomainResult};
use crate::repository::{BasketRepository, BasketStore};
use super::navigator::{Navigator, Screen};

/// Everything the UI needs to draw the current screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenView {
    pub screen: Screen,
    /// The open basket; present exactly when viewing
    pub basket: Option<Basket>,
    /// Inline message for the search screen
    pub message: Option<String>,
}

pub struct BasketSession {
    store: BasketStore,
    navigator: Navigator,
}

impl BasketSession {
    pub fn new(store: BasketStore) -> Self {
        Self {
            store,
            navigator: Navigator::new(),
        }
    }

    pub fn view(&self) -> ScreenView {
        let basket = self
            .navigator
            .selected()
            .and_then(|code| self.store.lookup(code.as_str()).ok());
        ScreenView {
            screen: self.navigator.screen().clone(),
            basket,
            message: self.navigator.message().map(str::to_string),
        }
    }

    /// Hand a candidate code to the navigator.
    ///
    /// A missing basket is not an error here: the returned view stays on
    /// the search screen and carries the not-found message.
    pub fn submit(&mut self, raw: &str, source: CodeSource) -> DomainResult<ScreenView> {
        let candidate = source
            .prepare(raw)
            .ok_or_else(|| DomainError::InvalidInput("basket code is blank".to_string()))?;

        match self.navigator.submit(&self.store, &candidate) {
            Ok(basket) => {
                log::info!("Opened basket {} ({:?} entry)", basket.code, source);
            }
            Err(err) if err.is_not_found() => {
                log::info!("No basket for {:?} ({:?} entry)", candidate, source);
            }
            Err(err) => return Err(err),
        }
        Ok(self.view())
    }

    pub fn add_item(&mut self, code: &str, item_name: &str) -> DomainResult<ScreenView> {
        let name = validate_item_name(item_name)?;
        let basket = self.store.add_item(code, name)?;
        log::debug!("Basket {} now holds {} items", basket.code, basket.items.len());
        Ok(self.view())
    }

    pub fn remove_item(&mut self, code: &str, item_name: &str) -> DomainResult<ScreenView> {
        let basket = self.store.remove_item(code, item_name)?;
        log::debug!("Basket {} now holds {} items", basket.code, basket.items.len());
        Ok(self.view())
    }

    pub fn back(&mut self) -> ScreenView {
        self.navigator.back();
        self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BasketCode, BasketStatus};

    fn two_basket_session() -> BasketSession {
        BasketSession::new(BasketStore::new([
            Basket::with_items("SEPET001", BasketStatus::Full, ["Elma", "Ekmek"]),
            Basket::new("SEPET002"),
        ]))
    }

    #[test]
    fn test_initial_view() {
        let session = BasketSession::new(BasketStore::seeded());
        let view = session.view();
        assert_eq!(view.screen, Screen::Searching);
        assert!(view.basket.is_none());
        assert!(view.message.is_none());
    }

    #[test]
    fn test_add_remove_back_scenario() {
        let mut session = two_basket_session();

        let view = session.submit("sepet002 ", CodeSource::Manual).unwrap();
        assert_eq!(view.screen, Screen::Viewing { code: BasketCode::new("SEPET002") });
        assert_eq!(view.basket.as_ref().unwrap().status, BasketStatus::Empty);

        let view = session.add_item("SEPET002", "Süt").unwrap();
        let basket = view.basket.unwrap();
        assert_eq!(basket.status, BasketStatus::Full);
        assert_eq!(basket.items, vec!["Süt"]);

        let view = session.remove_item("SEPET002", "Süt").unwrap();
        let basket = view.basket.unwrap();
        assert_eq!(basket.status, BasketStatus::Empty);
        assert!(basket.items.is_empty());

        let view = session.back();
        assert_eq!(view.screen, Screen::Searching);
        assert!(view.basket.is_none());

        let again = session.store.lookup("SEPET002").unwrap();
        assert_eq!(again.status, BasketStatus::Empty);
        assert!(again.items.is_empty());
    }

    #[test]
    fn test_unknown_code_scenario() {
        let mut session = two_basket_session();
        let view = session.submit("SEPET999", CodeSource::Manual).unwrap();
        assert_eq!(view.screen, Screen::Searching);
        assert!(view.basket.is_none());
        assert_eq!(view.message.as_deref(), Some("No basket found for code SEPET999"));
    }

    #[test]
    fn test_unknown_code_variants_stay_searching() {
        let mut session = two_basket_session();
        let cases = [
            (" sepet999 ", CodeSource::Manual, "SEPET999"),
            ("Sepet003", CodeSource::Manual, "SEPET003"),
            ("sepet009\n", CodeSource::Scan, "sepet009"),
            (" SEPET0012", CodeSource::Scan, "SEPET0012"),
        ];
        for (raw, source, shown) in cases {
            let view = session.submit(raw, source).unwrap();
            assert_eq!(view.screen, Screen::Searching);
            assert!(view.basket.is_none());
            assert_eq!(
                view.message.as_deref(),
                Some(format!("No basket found for code {}", shown).as_str())
            );
        }
        assert_eq!(session.store.lookup("SEPET001").unwrap().items, vec!["Elma", "Ekmek"]);
    }

    #[test]
    fn test_scanned_code_uses_lookup_matching() {
        let mut session = two_basket_session();
        let view = session.submit(" sepet001", CodeSource::Scan).unwrap();
        assert_eq!(view.screen, Screen::Viewing { code: BasketCode::new("SEPET001") });
        assert_eq!(view.basket.unwrap().items, vec!["Elma", "Ekmek"]);
    }

    #[test]
    fn test_blank_inputs_rejected() {
        let mut session = two_basket_session();
        assert!(matches!(
            session.submit("   ", CodeSource::Manual),
            Err(DomainError::InvalidInput(_))
        ));

        session.submit("SEPET001", CodeSource::Manual).unwrap();
        assert!(matches!(
            session.add_item("SEPET001", "  "),
            Err(DomainError::InvalidInput(_))
        ));
        assert_eq!(session.store.lookup("SEPET001").unwrap().items, vec!["Elma", "Ekmek"]);
    }

    #[test]
    fn test_submit_while_viewing_keeps_basket() {
        let mut session = two_basket_session();
        session.submit("SEPET001", CodeSource::Manual).unwrap();
        let err = session.submit("SEPET002", CodeSource::Scan).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(session.navigator.selected(), Some(&BasketCode::new("SEPET001")));
    }
}
