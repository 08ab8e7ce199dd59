//! Screen State Machine
//!
//! `Searching` until a candidate code resolves to a basket, then
//! `Viewing(code)` until the user goes back. A failed lookup stays in
//! `Searching` and leaves a message for the search screen.

use serde::{Deserialize, Serialize};

use crate::domain::{Basket, BasketCode, DomainError, DomainResult};
use crate::repository::BasketRepository;

/// Which screen is active
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Searching,
    Viewing { code: BasketCode },
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    screen: Screen,
    message: Option<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Code of the basket being viewed, if any
    pub fn selected(&self) -> Option<&BasketCode> {
        match &self.screen {
            Screen::Searching => None,
            Screen::Viewing { code } => Some(code),
        }
    }

    /// Inline message for the search screen
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Try to open the basket for `candidate`.
    ///
    /// Only valid while searching. On a miss the screen is unchanged and a
    /// not-found message is recorded; the error is still returned so callers
    /// can tell the two outcomes apart.
    pub fn submit<R>(&mut self, repo: &R, candidate: &str) -> DomainResult<Basket>
    where
        R: BasketRepository + ?Sized,
    {
        if let Some(code) = self.selected() {
            return Err(DomainError::Conflict(format!("basket {} is already open", code)));
        }

        match repo.lookup(candidate) {
            Ok(basket) => {
                self.screen = Screen::Viewing { code: basket.code.clone() };
                self.message = None;
                Ok(basket)
            }
            Err(err) => {
                if err.is_not_found() {
                    self.message = Some(not_found_message(candidate));
                }
                Err(err)
            }
        }
    }

    /// Return to the search screen. Returns false if already searching.
    pub fn back(&mut self) -> bool {
        self.message = None;
        match self.screen {
            Screen::Searching => false,
            Screen::Viewing { .. } => {
                self.screen = Screen::Searching;
                true
            }
        }
    }
}

fn not_found_message(candidate: &str) -> String {
    format!("No basket found for code {}", candidate.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::BasketStore;

    #[test]
    fn test_starts_searching() {
        let nav = Navigator::new();
        assert_eq!(nav.screen(), &Screen::Searching);
        assert!(nav.selected().is_none());
        assert!(nav.message().is_none());
    }

    #[test]
    fn test_submit_found_switches_to_viewing() {
        let store = BasketStore::seeded();
        let mut nav = Navigator::new();

        let basket = nav.submit(&store, "sepet002 ").unwrap();
        assert_eq!(basket.code.as_str(), "SEPET002");
        assert_eq!(nav.screen(), &Screen::Viewing { code: BasketCode::new("SEPET002") });
    }

    #[test]
    fn test_submit_missing_stays_searching() {
        let store = BasketStore::seeded();
        let mut nav = Navigator::new();

        let err = nav.submit(&store, "SEPET999").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(nav.screen(), &Screen::Searching);
        assert_eq!(nav.message(), Some("No basket found for code SEPET999"));

        // A later hit clears the message
        nav.submit(&store, "SEPET001").unwrap();
        assert!(nav.message().is_none());
    }

    #[test]
    fn test_submit_while_viewing_is_refused() {
        let store = BasketStore::seeded();
        let mut nav = Navigator::new();
        nav.submit(&store, "SEPET001").unwrap();

        let err = nav.submit(&store, "SEPET002").unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(nav.selected(), Some(&BasketCode::new("SEPET001")));
    }

    #[test]
    fn test_back_cycles() {
        let store = BasketStore::seeded();
        let mut nav = Navigator::new();
        assert!(!nav.back());

        nav.submit(&store, "SEPET003").unwrap();
        assert!(nav.back());
        assert_eq!(nav.screen(), &Screen::Searching);

        nav.submit(&store, "SEPET004").unwrap();
        assert_eq!(nav.selected(), Some(&BasketCode::new("SEPET004")));
    }

    #[test]
    fn test_screen_wire_format() {
        let viewing = Screen::Viewing { code: BasketCode::new("SEPET001") };
        assert_eq!(
            serde_json::to_value(&viewing).unwrap(),
            serde_json::json!({ "kind": "viewing", "code": "SEPET001" })
        );
        assert_eq!(
            serde_json::to_value(&Screen::Searching).unwrap(),
            serde_json::json!({ "kind": "searching" })
        );
    }
}
