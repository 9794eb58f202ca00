//! Per-order processing outcomes.

/// Why an order was filtered out before any external work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Order came through a different sales channel.
    OtherSource,
    /// Provider status is not the configured shipped status.
    NotShipped,
    /// Already present in the processed-order ledger.
    AlreadyProcessed,
}

impl SkipReason {
    /// Returns the reason name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::OtherSource => "other_source",
            SkipReason::NotShipped => "not_shipped",
            SkipReason::AlreadyProcessed => "already_processed",
        }
    }
}

/// Terminal outcome of one order within a batch run.
///
/// ```text
/// Fetched ──┬──► Skipped(reason)        no external calls, no ledger write
///           ├──► InvoiceMissing         retried on a future run
///           └──► Notified | NotifyFailed   recorded in the ledger
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOutcome {
    /// Filtered out before any external call.
    Skipped(SkipReason),
    /// Eligible but no invoice has been issued yet.
    InvoiceMissing,
    /// Published, notified and recorded.
    Notified,
    /// Recorded, but the notification send failed and was only logged.
    NotifyFailed,
}

impl OrderOutcome {
    /// True when the outcome left an entry in the processed ledger.
    pub fn is_recorded(&self) -> bool {
        matches!(self, OrderOutcome::Notified | OrderOutcome::NotifyFailed)
    }

    /// Returns the outcome name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderOutcome::Skipped(reason) => reason.as_str(),
            OrderOutcome::InvoiceMissing => "invoice_missing",
            OrderOutcome::Notified => "notified",
            OrderOutcome::NotifyFailed => "notify_failed",
        }
    }
}

impl std::fmt::Display for OrderOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tally of outcomes across one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Orders returned by the provider for the lookback window.
    pub fetched: usize,
    /// Orders filtered out before any external call.
    pub skipped: usize,
    /// Eligible orders with no invoice yet.
    pub invoice_missing: usize,
    /// Orders notified and recorded.
    pub notified: usize,
    /// Orders recorded despite a failed send.
    pub notify_failed: usize,
    /// Orders abandoned mid-processing by a per-order error.
    pub failed: usize,
}

impl RunReport {
    /// Folds one order outcome into the tally.
    pub fn observe(&mut self, outcome: &OrderOutcome) {
        match outcome {
            OrderOutcome::Skipped(_) => self.skipped += 1,
            OrderOutcome::InvoiceMissing => self.invoice_missing += 1,
            OrderOutcome::Notified => self.notified += 1,
            OrderOutcome::NotifyFailed => self.notify_failed += 1,
        }
    }

    /// Number of orders recorded in the ledger during this run.
    pub fn recorded(&self) -> usize {
        self.notified + self.notify_failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_outcomes() {
        assert!(OrderOutcome::Notified.is_recorded());
        assert!(OrderOutcome::NotifyFailed.is_recorded());
        assert!(!OrderOutcome::InvoiceMissing.is_recorded());
        assert!(!OrderOutcome::Skipped(SkipReason::OtherSource).is_recorded());
    }

    #[test]
    fn report_tallies_outcomes() {
        let mut report = RunReport::default();
        report.observe(&OrderOutcome::Skipped(SkipReason::AlreadyProcessed));
        report.observe(&OrderOutcome::Notified);
        report.observe(&OrderOutcome::NotifyFailed);
        report.observe(&OrderOutcome::InvoiceMissing);

        assert_eq!(report.skipped, 1);
        assert_eq!(report.notified, 1);
        assert_eq!(report.notify_failed, 1);
        assert_eq!(report.invoice_missing, 1);
        assert_eq!(report.recorded(), 2);
    }

    #[test]
    fn outcome_names() {
        assert_eq!(OrderOutcome::Notified.to_string(), "notified");
        assert_eq!(
            OrderOutcome::Skipped(SkipReason::NotShipped).to_string(),
            "not_shipped"
        );
    }
}
