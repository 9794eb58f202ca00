//! Invoice publishing: local artifact plus public upload.

use std::path::PathBuf;

use common::InvoiceId;
use gateway::FileHost;

use crate::error::Result;

/// Writes invoice PDFs locally and uploads them to the file host.
///
/// The local artifact is named `invoice_{id}.pdf` and is left in place
/// after upload. Re-publishing the same invoice overwrites the artifact
/// and uploads again, so retrying a partially processed order is safe.
pub struct InvoicePublisher<F: FileHost> {
    host: F,
    output_dir: PathBuf,
}

impl<F: FileHost> InvoicePublisher<F> {
    /// Creates a publisher writing artifacts under `output_dir`.
    pub fn new(host: F, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            host,
            output_dir: output_dir.into(),
        }
    }

    /// Persists the invoice bytes and returns the public URL of the upload.
    #[tracing::instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn publish(&self, invoice_id: InvoiceId, bytes: &[u8]) -> Result<String> {
        let name = format!("invoice_{invoice_id}.pdf");
        let path = self.output_dir.join(&name);

        tokio::fs::write(&path, bytes).await?;
        let url = self.host.upload_public(&name, &path).await?;

        tracing::debug!(%invoice_id, %url, "invoice published");
        Ok(url)
    }
}
