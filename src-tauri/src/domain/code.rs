//! Basket Codes
//!
//! Codes are free-form strings. Matching ignores surrounding whitespace and
//! letter case, so every code also has a normalized key form.

use serde::{Deserialize, Serialize};

/// Canonical basket code as stored in the basket table
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasketCode(String);

impl BasketCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lookup key for this code
    pub fn key(&self) -> String {
        normalize_key(&self.0)
    }
}

impl std::fmt::Display for BasketCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduce raw input to the key used for matching: trimmed and upper-cased.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Where a candidate code came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CodeSource {
    /// Typed into the search form
    #[default]
    Manual,
    /// Decoded from a camera frame
    Scan,
}

impl CodeSource {
    /// Prepare a raw candidate for lookup.
    ///
    /// Manual entries are trimmed and upper-cased here; scanned values are
    /// passed through untouched and left to the lookup's own matching.
    /// Returns `None` for blank input, which is never submitted.
    pub fn prepare(&self, raw: &str) -> Option<String> {
        if raw.trim().is_empty() {
            return None;
        }
        match self {
            CodeSource::Manual => Some(normalize_key(raw)),
            CodeSource::Scan => Some(raw.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  sepet002 "), "SEPET002");
        assert_eq!(normalize_key("SePeT001"), "SEPET001");
        assert_eq!(normalize_key("\tSEPET003\n"), "SEPET003");
    }

    #[test]
    fn test_code_key_ignores_casing() {
        let code = BasketCode::new("Sepet001");
        assert_eq!(code.key(), "SEPET001");
        assert_eq!(code.key(), normalize_key(" sepet001 "));
        assert_ne!(code.key(), normalize_key("SEPET0011"));
    }

    #[test]
    fn test_manual_source_normalizes() {
        assert_eq!(CodeSource::Manual.prepare(" sepet004 "), Some("SEPET004".to_string()));
        assert_eq!(CodeSource::Manual.prepare("   "), None);
    }

    #[test]
    fn test_scan_source_passes_through() {
        assert_eq!(CodeSource::Scan.prepare(" sepet004"), Some(" sepet004".to_string()));
        assert_eq!(CodeSource::Scan.prepare(""), None);
    }
}
