use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use common::OrderId;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::{LedgerError, Result};
use crate::store::ProcessedLedger;

/// File-backed ledger, one order id per line.
///
/// The full set is loaded once at open and kept in memory for the run;
/// `record` appends a line and flushes before returning, so an id recorded
/// before a crash is never reprocessed. A missing file is an empty ledger
/// (first run); any other read failure is an error.
pub struct FileLedger {
    path: PathBuf,
    // The mutex also serializes file appends.
    state: Arc<Mutex<HashSet<OrderId>>>,
}

impl FileLedger {
    /// Opens the ledger at `path`, loading all previously recorded ids.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let ids = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => {
                let mut ids = HashSet::new();
                for line in contents.lines() {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let id = line
                        .parse::<i64>()
                        .map_err(|_| LedgerError::Corrupt(line.to_string()))?;
                    ids.insert(OrderId::new(id));
                }
                ids
            }
            Err(e) if e.kind() == ErrorKind::NotFound => HashSet::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), count = ids.len(), "ledger loaded");

        Ok(Self {
            path,
            state: Arc::new(Mutex::new(ids)),
        })
    }

    /// Returns the number of recorded order ids.
    pub async fn len(&self) -> usize {
        self.state.lock().await.len()
    }

    /// Returns true if no order has been recorded yet.
    pub async fn is_empty(&self) -> bool {
        self.state.lock().await.is_empty()
    }
}

#[async_trait]
impl ProcessedLedger for FileLedger {
    async fn contains(&self, order_id: OrderId) -> Result<bool> {
        Ok(self.state.lock().await.contains(&order_id))
    }

    async fn record(&self, order_id: OrderId) -> Result<()> {
        let mut state = self.state.lock().await;

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(format!("{order_id}\n").as_bytes()).await?;
        file.flush().await?;

        state.insert(order_id);
        tracing::debug!(%order_id, "order recorded in ledger");
        Ok(())
    }
}
