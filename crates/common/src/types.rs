use serde::{Deserialize, Serialize};

/// Unique identifier of an order, as assigned by the order provider.
///
/// Wraps the provider's numeric id to provide type safety and prevent
/// mixing order ids with other numeric identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Creates an order id from the provider's numeric value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying numeric value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<OrderId> for i64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

/// Unique identifier of an invoice, as assigned by the order provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(i64);

impl InvoiceId {
    /// Creates an invoice id from the provider's numeric value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying numeric value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for InvoiceId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<InvoiceId> for i64 {
    fn from(id: InvoiceId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_preserves_value() {
        let id = OrderId::new(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn order_id_serialization_roundtrip() {
        let id = OrderId::new(123456);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "123456");
        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn invoice_id_serialization_roundtrip() {
        let id = InvoiceId::new(987);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "987");
        let deserialized: InvoiceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn ids_convert_from_i64() {
        let order: OrderId = 7.into();
        let invoice: InvoiceId = 7.into();
        assert_eq!(i64::from(order), i64::from(invoice));
    }
}
