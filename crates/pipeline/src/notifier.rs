//! Notification formatting and dispatch.

use domain::{Order, shipment_message};
use gateway::Messenger;

use crate::error::Result;

/// Where outbound notifications are delivered.
///
/// The mode is decided once per run from configuration and logged at
/// startup, never scattered across call sites; dry-run redirects every
/// message to the operator number so real customers are unreachable
/// while testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Send to the real customer phone number.
    Live,
    /// Send everything to the fixed operator number instead.
    DryRun { operator: String },
}

impl DeliveryMode {
    /// Resolves the destination number for an order.
    pub fn destination<'a>(&'a self, order: &'a Order) -> &'a str {
        match self {
            DeliveryMode::Live => order.phone.as_str(),
            DeliveryMode::DryRun { operator } => operator.as_str(),
        }
    }
}

/// Formats and dispatches shipment notifications.
pub struct Notifier<M: Messenger> {
    messenger: M,
    mode: DeliveryMode,
}

impl<M: Messenger> Notifier<M> {
    /// Creates a notifier delivering according to `mode`.
    pub fn new(messenger: M, mode: DeliveryMode) -> Self {
        Self { messenger, mode }
    }

    /// Returns the configured delivery mode.
    pub fn mode(&self) -> &DeliveryMode {
        &self.mode
    }

    /// Sends the shipment notification for the order. Returns the message
    /// id assigned by the delivery service.
    pub async fn notify(
        &self,
        order: &Order,
        estimated_delivery: &str,
        invoice_url: &str,
        tracking_numbers: &[String],
    ) -> Result<String> {
        let body = shipment_message(estimated_delivery, invoice_url, tracking_numbers);
        let to = self.mode.destination(order);

        let sid = self.messenger.send(to, &body).await?;
        Ok(sid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gateway::InMemoryMessenger;

    fn order_with_phone(phone: &str) -> Order {
        serde_json::from_value(serde_json::json!({
            "order_id": 1,
            "order_source": "personal",
            "phone": phone,
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn live_mode_sends_to_customer() {
        let messenger = InMemoryMessenger::new();
        let notifier = Notifier::new(messenger.clone(), DeliveryMode::Live);
        let order = order_with_phone("+40711222333");

        notifier
            .notify(&order, "2024-01-15", "https://files.example/i.pdf", &[])
            .await
            .unwrap();

        assert_eq!(messenger.last_message().unwrap().to, "+40711222333");
    }

    #[tokio::test]
    async fn dry_run_redirects_to_operator() {
        let messenger = InMemoryMessenger::new();
        let notifier = Notifier::new(
            messenger.clone(),
            DeliveryMode::DryRun {
                operator: "+40799000111".to_string(),
            },
        );
        let order = order_with_phone("+40711222333");

        notifier
            .notify(&order, "2024-01-15", "https://files.example/i.pdf", &[])
            .await
            .unwrap();

        let last = messenger.last_message().unwrap();
        assert_eq!(last.to, "+40799000111");
    }

    #[tokio::test]
    async fn body_carries_estimate_url_and_tracking() {
        let messenger = InMemoryMessenger::new();
        let notifier = Notifier::new(messenger.clone(), DeliveryMode::Live);
        let order = order_with_phone("+40711222333");

        notifier
            .notify(
                &order,
                "2024-01-15",
                "https://files.example/invoice_9.pdf",
                &["CRG0009".to_string()],
            )
            .await
            .unwrap();

        let body = messenger.last_message().unwrap().body;
        assert!(body.contains("2024-01-15"));
        assert!(body.contains("https://files.example/invoice_9.pdf"));
        assert!(body.contains("CRG0009"));
    }

    #[tokio::test]
    async fn send_failure_propagates() {
        let messenger = InMemoryMessenger::new();
        messenger.set_fail_on_send(true);
        let notifier = Notifier::new(messenger, DeliveryMode::Live);
        let order = order_with_phone("+40711222333");

        let result = notifier
            .notify(&order, "2024-01-15", "https://files.example/i.pdf", &[])
            .await;
        assert!(result.is_err());
    }
}
