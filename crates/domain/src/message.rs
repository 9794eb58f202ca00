//! Notification message template.

/// Builds the shipment notification body.
///
/// Tracking numbers are comma-joined; an order with no packages still gets
/// a message, with an empty AWB field.
pub fn shipment_message(
    estimated_delivery: &str,
    invoice_url: &str,
    tracking_numbers: &[String],
) -> String {
    let awb = tracking_numbers.join(", ");

    format!(
        "🚚 Comanda expediata :) \n\n\
         Detalii colet: \n\n\
         Livrare estimata: {estimated_delivery} \n\
         Plata: ramburs\n\n\
         Factura: {invoice_url}\n\n\
         AWB: {awb}\n\n\
         Spor la lucru!"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_embeds_all_fields() {
        let body = shipment_message(
            "2024-01-15",
            "https://files.example/invoice_7.pdf",
            &["CRG123".to_string(), "CRG456".to_string()],
        );

        assert!(body.contains("Livrare estimata: 2024-01-15"));
        assert!(body.contains("Factura: https://files.example/invoice_7.pdf"));
        assert!(body.contains("AWB: CRG123, CRG456"));
        assert!(body.contains("Plata: ramburs"));
        assert!(body.ends_with("Spor la lucru!"));
    }

    #[test]
    fn no_packages_leaves_awb_empty() {
        let body = shipment_message("2024-01-15", "https://files.example/i.pdf", &[]);

        assert!(body.contains("AWB: \n"));
    }

    #[test]
    fn single_tracking_number_has_no_separator() {
        let body =
            shipment_message("2024-01-15", "https://files.example/i.pdf", &["X1".to_string()]);

        assert!(body.contains("AWB: X1\n"));
        assert!(!body.contains(", "));
    }
}
