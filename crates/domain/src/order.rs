use common::OrderId;
use serde::{Deserialize, Serialize};

/// Source tag of orders placed directly with the store, as opposed to
/// marketplace channels.
pub const PERSONAL_SOURCE: &str = "personal";

/// An order as returned by the order provider.
///
/// Orders are created and mutated only by the provider; this system reads
/// them and never writes back. Fields the provider may omit default to
/// empty/zero so a sparse payload still deserializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    #[serde(default)]
    pub order_source: String,
    #[serde(default)]
    pub order_status_id: i64,
    /// Creation time, Unix epoch seconds.
    #[serde(default)]
    pub date_add: i64,
    /// Customer phone number, the notification destination in live mode.
    #[serde(default)]
    pub phone: String,
    /// Customer-facing order page URL.
    #[serde(default)]
    pub order_page: String,
}

impl Order {
    /// True for orders placed through the personal sales channel.
    pub fn is_personal(&self) -> bool {
        self.order_source == PERSONAL_SOURCE
    }

    /// True when the provider marks the order with the given status id.
    pub fn has_status(&self, status_id: i64) -> bool {
        self.order_status_id == status_id
    }
}
