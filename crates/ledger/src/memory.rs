use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::OrderId;

use crate::error::{LedgerError, Result};
use crate::store::ProcessedLedger;

#[derive(Debug, Default)]
struct InMemoryLedgerState {
    recorded: HashSet<OrderId>,
    fail_on_record: bool,
}

/// In-memory ledger for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    state: Arc<RwLock<InMemoryLedgerState>>,
}

impl InMemoryLedger {
    /// Creates a new empty in-memory ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the ledger to fail on the next record call.
    pub fn set_fail_on_record(&self, fail: bool) {
        self.state.write().unwrap().fail_on_record = fail;
    }

    /// Returns the number of recorded order ids.
    pub fn recorded_count(&self) -> usize {
        self.state.read().unwrap().recorded.len()
    }
}

#[async_trait]
impl ProcessedLedger for InMemoryLedger {
    async fn contains(&self, order_id: OrderId) -> Result<bool> {
        Ok(self.state.read().unwrap().recorded.contains(&order_id))
    }

    async fn record(&self, order_id: OrderId) -> Result<()> {
        let mut state = self.state.write().unwrap();

        if state.fail_on_record {
            return Err(LedgerError::Io(std::io::Error::other(
                "ledger unavailable",
            )));
        }

        state.recorded.insert(order_id);
        Ok(())
    }
}
