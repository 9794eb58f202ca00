//! HTTP client for the Baselinker order connector.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use common::{InvoiceId, OrderId};
use domain::Order;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{GatewayError, Result};
use crate::orders::OrderProvider;

/// Production endpoint of the order connector.
pub const DEFAULT_ENDPOINT: &str = "https://api.baselinker.com/connector.php";

const TOKEN_HEADER: &str = "X-BLToken";

/// Typed wrapper over the connector's form-encoded RPC surface.
///
/// Every operation is a POST carrying a `method` name and a JSON-encoded
/// `parameters` field, authenticated by a static token header. The
/// response is JSON with one method-specific top-level key.
pub struct BaselinkerProvider {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

#[derive(Debug, Deserialize)]
struct OrdersResponse {
    #[serde(default)]
    orders: Vec<Order>,
}

#[derive(Debug, Deserialize)]
struct InvoicesResponse {
    #[serde(default)]
    invoices: Vec<InvoiceMeta>,
}

#[derive(Debug, Deserialize)]
struct InvoiceMeta {
    invoice_id: InvoiceId,
}

#[derive(Debug, Deserialize)]
struct InvoiceFileResponse {
    /// Base64-encoded PDF document.
    invoice: String,
}

#[derive(Debug, Deserialize)]
struct PackagesResponse {
    #[serde(default)]
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    #[serde(default)]
    courier_package_nr: String,
}

impl BaselinkerProvider {
    /// Creates a provider talking to the production endpoint.
    pub fn new(client: reqwest::Client, token: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            token: token.into(),
        }
    }

    /// Overrides the connector endpoint, for tests against a local server.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        parameters: serde_json::Value,
    ) -> Result<T> {
        let parameters = parameters.to_string();
        let response = self
            .client
            .post(&self.endpoint)
            .header(TOKEN_HEADER, &self.token)
            .form(&[("method", method), ("parameters", parameters.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Api {
                service: "order provider",
                detail: format!("{method} returned {status}"),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl OrderProvider for BaselinkerProvider {
    async fn list_orders(&self, since: i64) -> Result<Vec<Order>> {
        let response: OrdersResponse = self
            .call(
                "getOrders",
                serde_json::json!({
                    "date_from": since,
                    "get_unconfirmed_orders": true,
                }),
            )
            .await?;

        Ok(response.orders)
    }

    async fn invoice_id(&self, order_id: OrderId) -> Result<Option<InvoiceId>> {
        let response: InvoicesResponse = self
            .call(
                "getInvoices",
                serde_json::json!({
                    "order_id": order_id,
                    "get_external_invoices": true,
                }),
            )
            .await?;

        Ok(response.invoices.first().map(|invoice| invoice.invoice_id))
    }

    async fn invoice_pdf(&self, invoice_id: InvoiceId) -> Result<Vec<u8>> {
        let response: InvoiceFileResponse = self
            .call(
                "getInvoiceFile",
                serde_json::json!({ "invoice_id": invoice_id }),
            )
            .await?;

        Ok(BASE64.decode(response.invoice.as_bytes())?)
    }

    async fn packages(&self, order_id: OrderId) -> Result<Vec<String>> {
        let response: PackagesResponse = self
            .call(
                "getOrderPackages",
                serde_json::json!({ "order_id": order_id }),
            )
            .await?;

        Ok(response
            .packages
            .into_iter()
            .map(|package| package.courier_package_nr)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_response_parses_provider_payload() {
        let response: OrdersResponse = serde_json::from_value(serde_json::json!({
            "status": "SUCCESS",
            "orders": [
                {
                    "order_id": 4321,
                    "order_source": "personal",
                    "order_status_id": 20507,
                    "date_add": 1_704_708_000,
                    "phone": "+40711222333",
                    "order_page": "https://orders.example/4321"
                }
            ]
        }))
        .unwrap();

        assert_eq!(response.orders.len(), 1);
        assert_eq!(response.orders[0].order_id, OrderId::new(4321));
        assert!(response.orders[0].is_personal());
    }

    #[test]
    fn empty_orders_key_defaults() {
        let response: OrdersResponse =
            serde_json::from_value(serde_json::json!({ "status": "SUCCESS" })).unwrap();
        assert!(response.orders.is_empty());
    }

    #[test]
    fn invoices_response_yields_first_invoice() {
        let response: InvoicesResponse = serde_json::from_value(serde_json::json!({
            "invoices": [
                { "invoice_id": 11, "order_id": 4321 },
                { "invoice_id": 12, "order_id": 4321 }
            ]
        }))
        .unwrap();

        assert_eq!(
            response.invoices.first().map(|i| i.invoice_id),
            Some(InvoiceId::new(11))
        );
    }

    #[test]
    fn invoice_file_decodes_base64() {
        let response: InvoiceFileResponse = serde_json::from_value(serde_json::json!({
            "invoice": BASE64.encode(b"%PDF-1.4 test")
        }))
        .unwrap();

        let bytes = BASE64.decode(response.invoice.as_bytes()).unwrap();
        assert_eq!(bytes, b"%PDF-1.4 test");
    }

    #[test]
    fn packages_response_tolerates_missing_number() {
        let response: PackagesResponse = serde_json::from_value(serde_json::json!({
            "packages": [
                { "courier_package_nr": "CRG0001" },
                {}
            ]
        }))
        .unwrap();

        let tracking: Vec<String> = response
            .packages
            .into_iter()
            .map(|p| p.courier_package_nr)
            .collect();
        assert_eq!(tracking, vec!["CRG0001".to_string(), String::new()]);
    }
}
