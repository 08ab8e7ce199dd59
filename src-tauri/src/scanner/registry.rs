//! Active Scan Registry
//!
//! Tracks the single scan session that may be open at a time. Each session
//! gets a fresh id so late reports from an abandoned session are dropped.

use super::channel::{scan_channel, IgnoreReason, ReportOutcome, ScanReporter, ScanSubscription};

#[derive(Debug)]
struct ActiveScan {
    id: u64,
    reporter: ScanReporter,
}

#[derive(Debug, Default)]
pub struct ScanRegistry {
    next_id: u64,
    active: Option<ActiveScan>,
}

impl ScanRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new session, cancelling any previous one.
    pub fn begin(&mut self) -> (u64, ScanSubscription) {
        self.next_id += 1;
        let id = self.next_id;
        let (reporter, subscription) = scan_channel();
        if let Some(previous) = self.active.replace(ActiveScan { id, reporter }) {
            log::debug!("Scan session {} replaced by {}", previous.id, id);
        }
        (id, subscription)
    }

    pub fn active_id(&self) -> Option<u64> {
        self.active.as_ref().map(|scan| scan.id)
    }

    /// Route a decoded value to session `id`
    pub fn report(&self, id: u64, value: &str) -> ReportOutcome {
        match &self.active {
            Some(scan) if scan.id == id => scan.reporter.report(value),
            _ => ReportOutcome::Ignored(IgnoreReason::Stale),
        }
    }

    /// Close session `id`. Returns false if it was not the active one.
    pub fn end(&mut self, id: u64) -> bool {
        if self.active_id() == Some(id) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Clear session `id` after its code has been taken. A session that has
    /// not delivered anything stays open.
    pub fn finish(&mut self, id: u64) -> bool {
        match &self.active {
            Some(scan) if scan.id == id && scan.reporter.is_delivered() => {
                self.active = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_report_routes_to_active_session() {
        let mut registry = ScanRegistry::new();
        let (id, mut subscription) = registry.begin();

        assert_eq!(registry.active_id(), Some(id));
        assert_eq!(registry.report(id, "SEPET001"), ReportOutcome::Accepted);
        assert_eq!(subscription.next().await.as_deref(), Some("SEPET001"));
    }

    #[tokio::test]
    async fn test_stale_session_ignored() {
        let mut registry = ScanRegistry::new();
        let (first, mut old_subscription) = registry.begin();
        let (second, _subscription) = registry.begin();

        assert_ne!(first, second);
        assert_eq!(
            registry.report(first, "SEPET001"),
            ReportOutcome::Ignored(IgnoreReason::Stale)
        );
        // Replacing a session cancels its subscription
        assert_eq!(old_subscription.next().await, None);
    }

    #[tokio::test]
    async fn test_end_cancels_session() {
        let mut registry = ScanRegistry::new();
        let (id, mut subscription) = registry.begin();

        assert!(registry.end(id));
        assert!(!registry.end(id));
        assert_eq!(registry.active_id(), None);
        assert_eq!(registry.report(id, "SEPET002"), ReportOutcome::Ignored(IgnoreReason::Stale));
        assert_eq!(subscription.next().await, None);
    }

    #[tokio::test]
    async fn test_finish_only_after_delivery() {
        let mut registry = ScanRegistry::new();
        let (id, mut subscription) = registry.begin();

        assert_eq!(registry.report(id, "   "), ReportOutcome::Ignored(IgnoreReason::Blank));
        assert!(!registry.finish(id));
        assert_eq!(registry.active_id(), Some(id));

        assert_eq!(registry.report(id, "SEPET003"), ReportOutcome::Accepted);
        assert_eq!(subscription.next().await.as_deref(), Some("SEPET003"));
        assert!(!registry.finish(id + 1));
        assert!(registry.finish(id));
        assert_eq!(registry.active_id(), None);
        assert_eq!(registry.report(id, "SEPET004"), ReportOutcome::Ignored(IgnoreReason::Stale));
    }

    #[tokio::test]
    async fn test_value_survives_end_after_acceptance() {
        let mut registry = ScanRegistry::new();
        let (id, mut subscription) = registry.begin();

        registry.report(id, "SEPET004");
        registry.end(id);
        assert_eq!(subscription.next().await.as_deref(), Some("SEPET004"));
    }
}
