//! Order provider trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use common::{InvoiceId, OrderId};
use domain::Order;

use crate::error::{GatewayError, Result};

/// Trait for the order-management provider operations used by the pipeline.
#[async_trait]
pub trait OrderProvider: Send + Sync {
    /// Lists orders created since the given Unix timestamp, including
    /// unconfirmed ones. Callers filter by source and status.
    async fn list_orders(&self, since: i64) -> Result<Vec<Order>>;

    /// Returns the id of the order's invoice, or `None` when no invoice
    /// has been issued yet. An absent invoice is not an error.
    async fn invoice_id(&self, order_id: OrderId) -> Result<Option<InvoiceId>>;

    /// Fetches the invoice document as PDF bytes.
    async fn invoice_pdf(&self, invoice_id: InvoiceId) -> Result<Vec<u8>>;

    /// Returns the courier tracking numbers of the order's packages.
    /// May be empty.
    async fn packages(&self, order_id: OrderId) -> Result<Vec<String>>;
}

#[derive(Debug, Default)]
struct InMemoryOrderState {
    orders: Vec<Order>,
    invoices: HashMap<OrderId, InvoiceId>,
    pdfs: HashMap<InvoiceId, Vec<u8>>,
    packages: HashMap<OrderId, Vec<String>>,
    invoice_lookups: u32,
    fail_on_list: bool,
}

/// In-memory order provider for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderProvider {
    state: Arc<RwLock<InMemoryOrderState>>,
}

impl InMemoryOrderProvider {
    /// Creates a new empty in-memory provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an order to the provider's listing.
    pub fn push_order(&self, order: Order) {
        self.state.write().unwrap().orders.push(order);
    }

    /// Registers an invoice id for an order without any document bytes.
    pub fn set_invoice_id(&self, order_id: OrderId, invoice_id: InvoiceId) {
        self.state.write().unwrap().invoices.insert(order_id, invoice_id);
    }

    /// Registers the PDF bytes for an invoice.
    pub fn set_invoice_pdf(&self, invoice_id: InvoiceId, pdf: &[u8]) {
        self.state.write().unwrap().pdfs.insert(invoice_id, pdf.to_vec());
    }

    /// Registers an invoice id together with its document bytes.
    pub fn set_invoice(&self, order_id: OrderId, invoice_id: InvoiceId, pdf: &[u8]) {
        let mut state = self.state.write().unwrap();
        state.invoices.insert(order_id, invoice_id);
        state.pdfs.insert(invoice_id, pdf.to_vec());
    }

    /// Registers the tracking numbers of an order's packages.
    pub fn set_packages(&self, order_id: OrderId, tracking: Vec<String>) {
        self.state.write().unwrap().packages.insert(order_id, tracking);
    }

    /// Configures the provider to fail on the next list call.
    pub fn set_fail_on_list(&self, fail: bool) {
        self.state.write().unwrap().fail_on_list = fail;
    }

    /// Returns how many invoice lookups have been made.
    pub fn invoice_lookup_count(&self) -> u32 {
        self.state.read().unwrap().invoice_lookups
    }
}

#[async_trait]
impl OrderProvider for InMemoryOrderProvider {
    async fn list_orders(&self, since: i64) -> Result<Vec<Order>> {
        let state = self.state.read().unwrap();

        if state.fail_on_list {
            return Err(GatewayError::Api {
                service: "order provider",
                detail: "unavailable".to_string(),
            });
        }

        Ok(state
            .orders
            .iter()
            .filter(|order| order.date_add >= since)
            .cloned()
            .collect())
    }

    async fn invoice_id(&self, order_id: OrderId) -> Result<Option<InvoiceId>> {
        let mut state = self.state.write().unwrap();
        state.invoice_lookups += 1;
        Ok(state.invoices.get(&order_id).copied())
    }

    async fn invoice_pdf(&self, invoice_id: InvoiceId) -> Result<Vec<u8>> {
        let state = self.state.read().unwrap();
        state.pdfs.get(&invoice_id).cloned().ok_or(GatewayError::Api {
            service: "order provider",
            detail: format!("no document for invoice {invoice_id}"),
        })
    }

    async fn packages(&self, order_id: OrderId) -> Result<Vec<String>> {
        let state = self.state.read().unwrap();
        Ok(state.packages.get(&order_id).cloned().unwrap_or_default())
    }
}
