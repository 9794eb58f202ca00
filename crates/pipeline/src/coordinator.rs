//! Batch coordinator for the fulfillment notification flow.

use chrono::Utc;
use domain::{Order, estimate_delivery};
use gateway::{FileHost, Messenger, OrderProvider};
use ledger::ProcessedLedger;

use crate::error::{PipelineError, Result};
use crate::notifier::Notifier;
use crate::outcome::{OrderOutcome, RunReport, SkipReason};
use crate::publisher::InvoicePublisher;

const SECONDS_PER_HOUR: i64 = 3600;

/// Batch settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Provider status id meaning "shipped, ready to notify".
    pub delivered_status_id: i64,
    /// How far back to ask the provider for orders.
    pub lookback_hours: i64,
}

/// Drives the per-order notification flow over one batch of orders.
///
/// Orders are processed sequentially and independently: an error is
/// caught at the order boundary, logged with the order id, and the batch
/// continues. Only a ledger failure aborts the run, since without the
/// processed set every candidate order risks a duplicate message.
pub struct FulfillmentPipeline<P, F, M, L>
where
    P: OrderProvider,
    F: FileHost,
    M: Messenger,
    L: ProcessedLedger,
{
    provider: P,
    publisher: InvoicePublisher<F>,
    notifier: Notifier<M>,
    ledger: L,
    settings: PipelineSettings,
}

impl<P, F, M, L> FulfillmentPipeline<P, F, M, L>
where
    P: OrderProvider,
    F: FileHost,
    M: Messenger,
    L: ProcessedLedger,
{
    /// Creates a new pipeline over the given service seams.
    pub fn new(
        provider: P,
        publisher: InvoicePublisher<F>,
        notifier: Notifier<M>,
        ledger: L,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            provider,
            publisher,
            notifier,
            ledger,
            settings,
        }
    }

    /// Runs one batch over the configured lookback window.
    pub async fn run(&self) -> Result<RunReport> {
        let since = Utc::now().timestamp() - self.settings.lookback_hours * SECONDS_PER_HOUR;
        self.run_since(since).await
    }

    /// Runs one batch over all orders created since the given timestamp.
    #[tracing::instrument(skip(self))]
    pub async fn run_since(&self, since: i64) -> Result<RunReport> {
        metrics::counter!("pipeline_runs_total").increment(1);
        let run_start = std::time::Instant::now();

        let orders = self.provider.list_orders(since).await?;
        tracing::info!(count = orders.len(), since, "orders fetched");

        let mut report = RunReport {
            fetched: orders.len(),
            ..RunReport::default()
        };

        for order in &orders {
            match self.process_order(order).await {
                Ok(outcome) => {
                    tracing::info!(order_id = %order.order_id, outcome = %outcome, "order outcome");
                    report.observe(&outcome);
                }
                Err(PipelineError::Ledger(e)) => return Err(PipelineError::Ledger(e)),
                Err(e) => {
                    metrics::counter!("pipeline_order_failures_total").increment(1);
                    tracing::error!(
                        order_id = %order.order_id,
                        error = %e,
                        "order failed, continuing with next"
                    );
                    report.failed += 1;
                }
            }
        }

        metrics::histogram!("pipeline_run_duration_seconds")
            .record(run_start.elapsed().as_secs_f64());
        tracing::info!(
            notified = report.notified,
            skipped = report.skipped,
            failed = report.failed,
            "batch finished"
        );

        Ok(report)
    }

    /// Advances a single order through filter, publish, notify, record.
    async fn process_order(&self, order: &Order) -> Result<OrderOutcome> {
        let order_id = order.order_id;

        if !order.is_personal() {
            return Ok(OrderOutcome::Skipped(SkipReason::OtherSource));
        }
        if self.ledger.contains(order_id).await? {
            return Ok(OrderOutcome::Skipped(SkipReason::AlreadyProcessed));
        }
        if !order.has_status(self.settings.delivered_status_id) {
            return Ok(OrderOutcome::Skipped(SkipReason::NotShipped));
        }

        // No invoice yet: leave the order unrecorded so a later run picks
        // it up once the invoice appears.
        let Some(invoice_id) = self.provider.invoice_id(order_id).await? else {
            tracing::info!(%order_id, "no invoice yet, will retry on a future run");
            return Ok(OrderOutcome::InvoiceMissing);
        };

        let pdf = self.provider.invoice_pdf(invoice_id).await?;
        let invoice_url = self.publisher.publish(invoice_id, &pdf).await?;
        let tracking_numbers = self.provider.packages(order_id).await?;

        let estimated_delivery = estimate_delivery(order.date_add);

        let outcome = match self
            .notifier
            .notify(order, &estimated_delivery, &invoice_url, &tracking_numbers)
            .await
        {
            Ok(sid) => {
                metrics::counter!("notifications_sent_total").increment(1);
                tracing::info!(%order_id, message_id = %sid, "notification sent");
                OrderOutcome::Notified
            }
            Err(e) => {
                // The order is still recorded below; a failed send is not
                // retried automatically.
                metrics::counter!("notifications_failed_total").increment(1);
                tracing::warn!(%order_id, error = %e, "notification send failed");
                OrderOutcome::NotifyFailed
            }
        };

        self.ledger.record(order_id).await?;
        Ok(outcome)
    }
}
