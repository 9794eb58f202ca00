//! Batch runner entry point.
//!
//! Loads configuration, wires the real gateways together and runs the
//! fulfillment pipeline once. Intended to be invoked from a scheduler;
//! the lookback window covers the gap between invocations.

use std::time::Duration;

use gateway::{BaselinkerProvider, DriveHost, TwilioMessenger};
use ledger::FileLedger;
use pipeline::{
    DeliveryMode, FulfillmentPipeline, InvoicePublisher, Notifier, PipelineSettings,
};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod config;

use config::Config;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() {
    // A .env file is optional; real deployments set the environment
    // directly.
    let _ = dotenv::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "configuration error");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "run aborted");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

    let ledger = FileLedger::open(&config.ledger_path).await?;

    let provider = BaselinkerProvider::new(client.clone(), config.baselinker_token.clone());
    let host = DriveHost::new(
        client.clone(),
        config.drive_access_token.clone(),
        config.drive_folder_id.clone(),
    );
    let messenger = TwilioMessenger::new(
        client,
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
        config.twilio_from_number.clone(),
    );

    let mode = if config.dry_run {
        DeliveryMode::DryRun {
            operator: config.operator_phone_number.clone(),
        }
    } else {
        DeliveryMode::Live
    };
    tracing::info!(
        ?mode,
        lookback_hours = config.lookback_hours,
        ledger_path = %config.ledger_path,
        "starting batch"
    );

    let pipeline = FulfillmentPipeline::new(
        provider,
        InvoicePublisher::new(host, &config.invoice_dir),
        Notifier::new(messenger, mode),
        ledger,
        PipelineSettings {
            delivered_status_id: config.delivered_status_id,
            lookback_hours: config.lookback_hours,
        },
    );

    let report = pipeline.run().await?;
    tracing::info!(
        fetched = report.fetched,
        skipped = report.skipped,
        invoice_missing = report.invoice_missing,
        notified = report.notified,
        notify_failed = report.notify_failed,
        failed = report.failed,
        "batch complete"
    );

    Ok(())
}
