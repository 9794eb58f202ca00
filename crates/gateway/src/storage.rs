//! File hosting trait and in-memory implementation.

use std::path::Path;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{GatewayError, Result};

/// Trait for the public file-hosting operations used by the pipeline.
#[async_trait]
pub trait FileHost: Send + Sync {
    /// Uploads the file at `path` under the given name and makes it
    /// readable by anyone with the link. Returns the durable public URL.
    async fn upload_public(&self, name: &str, path: &Path) -> Result<String>;
}

#[derive(Debug, Default)]
struct InMemoryFileHostState {
    uploads: Vec<String>,
    fail_on_upload: bool,
}

/// In-memory file host for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFileHost {
    state: Arc<RwLock<InMemoryFileHostState>>,
}

impl InMemoryFileHost {
    /// Creates a new in-memory file host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the host to fail on the next upload call.
    pub fn set_fail_on_upload(&self, fail: bool) {
        self.state.write().unwrap().fail_on_upload = fail;
    }

    /// Returns the number of completed uploads.
    pub fn upload_count(&self) -> usize {
        self.state.read().unwrap().uploads.len()
    }

    /// Returns true if a file was uploaded under the given name.
    pub fn has_upload(&self, name: &str) -> bool {
        self.state
            .read()
            .unwrap()
            .uploads
            .iter()
            .any(|uploaded| uploaded == name)
    }
}

#[async_trait]
impl FileHost for InMemoryFileHost {
    async fn upload_public(&self, name: &str, path: &Path) -> Result<String> {
        // The caller must have written the artifact first.
        tokio::fs::metadata(path).await?;

        let mut state = self.state.write().unwrap();

        if state.fail_on_upload {
            return Err(GatewayError::Api {
                service: "file host",
                detail: "upload rejected".to_string(),
            });
        }

        state.uploads.push(name.to_string());
        Ok(format!("https://files.example/{name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_returns_public_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice_1.pdf");
        tokio::fs::write(&path, b"%PDF").await.unwrap();

        let host = InMemoryFileHost::new();
        let url = host.upload_public("invoice_1.pdf", &path).await.unwrap();

        assert_eq!(url, "https://files.example/invoice_1.pdf");
        assert_eq!(host.upload_count(), 1);
        assert!(host.has_upload("invoice_1.pdf"));
    }

    #[tokio::test]
    async fn upload_of_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let host = InMemoryFileHost::new();

        let result = host
            .upload_public("missing.pdf", &dir.path().join("missing.pdf"))
            .await;
        assert!(result.is_err());
        assert_eq!(host.upload_count(), 0);
    }

    #[tokio::test]
    async fn fail_on_upload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invoice_1.pdf");
        tokio::fs::write(&path, b"%PDF").await.unwrap();

        let host = InMemoryFileHost::new();
        host.set_fail_on_upload(true);

        let result = host.upload_public("invoice_1.pdf", &path).await;
        assert!(matches!(result, Err(GatewayError::Api { .. })));
        assert_eq!(host.upload_count(), 0);
    }
}
