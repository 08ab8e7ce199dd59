//! Scan Session Channel
//!
//! A scan session delivers at most one decoded code. The recognizer side
//! holds a `ScanReporter`, the consumer a `ScanSubscription`, joined by a
//! single-slot channel. Dropping the subscription cancels the session;
//! dropping the reporter ends the subscription.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Why a reported value was not taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Empty or whitespace-only decode
    Blank,
    /// This session already delivered its code
    AlreadyDelivered,
    /// The consumer stopped listening
    Closed,
    /// The value belongs to a session that is no longer active
    Stale,
}

/// Result of reporting a decoded value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum ReportOutcome {
    Accepted,
    Ignored(IgnoreReason),
}

impl ReportOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ReportOutcome::Accepted)
    }
}

/// Open a new scan session
pub fn scan_channel() -> (ScanReporter, ScanSubscription) {
    let (tx, rx) = mpsc::channel(1);
    let reporter = ScanReporter {
        tx,
        delivered: Arc::new(AtomicBool::new(false)),
    };
    (reporter, ScanSubscription { rx })
}

/// Recognizer side of a scan session
#[derive(Debug)]
pub struct ScanReporter {
    tx: mpsc::Sender<String>,
    delivered: Arc<AtomicBool>,
}

impl ScanReporter {
    /// Offer a decoded value. Only the first non-blank value is accepted.
    pub fn report(&self, value: &str) -> ReportOutcome {
        if value.trim().is_empty() {
            return ReportOutcome::Ignored(IgnoreReason::Blank);
        }
        if self.tx.is_closed() {
            return ReportOutcome::Ignored(IgnoreReason::Closed);
        }
        if self
            .delivered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return ReportOutcome::Ignored(IgnoreReason::AlreadyDelivered);
        }

        match self.tx.try_send(value.to_string()) {
            Ok(()) => ReportOutcome::Accepted,
            Err(TrySendError::Full(_)) => ReportOutcome::Ignored(IgnoreReason::AlreadyDelivered),
            Err(TrySendError::Closed(_)) => ReportOutcome::Ignored(IgnoreReason::Closed),
        }
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered.load(Ordering::Acquire)
    }
}

/// Consumer side of a scan session
#[derive(Debug)]
pub struct ScanSubscription {
    rx: mpsc::Receiver<String>,
}

impl ScanSubscription {
    /// Wait for the session's code. `None` once the reporter is gone
    /// without having delivered anything.
    pub async fn next(&mut self) -> Option<String> {
        self.rx.recv().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_value_wins() {
        let (reporter, mut subscription) = scan_channel();

        assert_eq!(reporter.report("SEPET001"), ReportOutcome::Accepted);
        assert_eq!(
            reporter.report("SEPET002"),
            ReportOutcome::Ignored(IgnoreReason::AlreadyDelivered)
        );
        assert!(reporter.is_delivered());

        assert_eq!(subscription.next().await.as_deref(), Some("SEPET001"));
        drop(reporter);
        assert_eq!(subscription.next().await, None);
    }

    #[tokio::test]
    async fn test_blank_values_do_not_consume_the_slot() {
        let (reporter, mut subscription) = scan_channel();

        assert_eq!(reporter.report("  "), ReportOutcome::Ignored(IgnoreReason::Blank));
        assert!(!reporter.is_delivered());
        assert_eq!(reporter.report("sepet003"), ReportOutcome::Accepted);
        assert_eq!(subscription.next().await.as_deref(), Some("sepet003"));
    }

    #[tokio::test]
    async fn test_dropped_subscription_closes_session() {
        let (reporter, subscription) = scan_channel();
        drop(subscription);
        assert_eq!(reporter.report("SEPET001"), ReportOutcome::Ignored(IgnoreReason::Closed));
        assert!(!reporter.is_delivered());
    }

    #[tokio::test]
    async fn test_dropped_reporter_ends_subscription() {
        let (reporter, mut subscription) = scan_channel();
        drop(reporter);
        assert_eq!(subscription.next().await, None);
    }

    #[tokio::test]
    async fn test_concurrent_reports_deliver_once() {
        let (reporter, mut subscription) = scan_channel();
        let reporter = Arc::new(reporter);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let reporter = reporter.clone();
                tokio::spawn(async move { reporter.report(&format!("SEPET00{}", i)) })
            })
            .collect();

        let mut accepted = 0;
        for handle in handles {
            if handle.await.unwrap().is_accepted() {
                accepted += 1;
            }
        }
        assert_eq!(accepted, 1);
        assert!(subscription.next().await.is_some());
    }

    #[test]
    fn test_outcome_wire_format() {
        assert_eq!(
            serde_json::to_value(ReportOutcome::Accepted).unwrap(),
            serde_json::json!({ "outcome": "accepted" })
        );
        assert_eq!(
            serde_json::to_value(ReportOutcome::Ignored(IgnoreReason::Stale)).unwrap(),
            serde_json::json!({ "outcome": "ignored", "reason": "stale" })
        );
    }
}
