//! Google Drive file host backed by the REST v3 API.

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::{GatewayError, Result};
use crate::storage::FileHost;

const DEFAULT_UPLOAD_ENDPOINT: &str = "https://www.googleapis.com/upload/drive/v3/files";
const DEFAULT_FILES_ENDPOINT: &str = "https://www.googleapis.com/drive/v3/files";

/// Uploads invoices into a fixed folder and grants anyone-with-the-link
/// read access.
///
/// Uses a multipart upload (metadata part + content part), then a
/// permission grant, and returns the file's web link. A failed upload is
/// not rolled back; re-uploading the same name simply creates a fresh
/// file.
pub struct DriveHost {
    client: reqwest::Client,
    access_token: String,
    folder_id: String,
    upload_endpoint: String,
    files_endpoint: String,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    #[serde(rename = "webViewLink")]
    web_view_link: String,
}

impl DriveHost {
    /// Creates a host uploading into the given folder.
    pub fn new(
        client: reqwest::Client,
        access_token: impl Into<String>,
        folder_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            access_token: access_token.into(),
            folder_id: folder_id.into(),
            upload_endpoint: DEFAULT_UPLOAD_ENDPOINT.to_string(),
            files_endpoint: DEFAULT_FILES_ENDPOINT.to_string(),
        }
    }

    /// Overrides the API endpoints, for tests against a local server.
    pub fn with_endpoints(
        mut self,
        upload_endpoint: impl Into<String>,
        files_endpoint: impl Into<String>,
    ) -> Self {
        self.upload_endpoint = upload_endpoint.into();
        self.files_endpoint = files_endpoint.into();
        self
    }
}

#[async_trait]
impl FileHost for DriveHost {
    async fn upload_public(&self, name: &str, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;

        let metadata = serde_json::json!({
            "name": name,
            "parents": [self.folder_id],
        });
        let form = reqwest::multipart::Form::new()
            .part(
                "metadata",
                reqwest::multipart::Part::text(metadata.to_string())
                    .mime_str("application/json")?,
            )
            .part(
                "file",
                reqwest::multipart::Part::bytes(bytes).mime_str("application/pdf")?,
            );

        let response = self
            .client
            .post(format!(
                "{}?uploadType=multipart&fields=id,webViewLink",
                self.upload_endpoint
            ))
            .bearer_auth(&self.access_token)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Api {
                service: "file host",
                detail: format!("upload of {name} returned {status}"),
            });
        }
        let file: DriveFile = response.json().await?;

        let permission = serde_json::json!({
            "type": "anyone",
            "role": "reader",
        });
        let response = self
            .client
            .post(format!("{}/{}/permissions", self.files_endpoint, file.id))
            .bearer_auth(&self.access_token)
            .json(&permission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Api {
                service: "file host",
                detail: format!("permission grant for {name} returned {status}"),
            });
        }

        tracing::debug!(%name, url = %file.web_view_link, "file published");
        Ok(file.web_view_link)
    }
}
