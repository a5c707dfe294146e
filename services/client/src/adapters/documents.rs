//! services/client/src/adapters/documents.rs
//!
//! This module contains the HTTP adapter for the Document Service.
//! It implements the `DocumentService` port from the `core` crate.

use crate::adapters::records::DocumentRecord;
use crate::adapters::transport::ApiClient;
use async_trait::async_trait;
use learning_assistant_core::domain::{Document, SelectedFile};
use learning_assistant_core::ports::{DocumentService, PortError, PortResult};
use reqwest::multipart::{Form, Part};
use tracing::info;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `DocumentService` port over the REST API.
#[derive(Clone)]
pub struct HttpDocumentAdapter {
    api: ApiClient,
}

impl HttpDocumentAdapter {
    /// Creates a new `HttpDocumentAdapter`.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

//=========================================================================================
// `DocumentService` Trait Implementation
//=========================================================================================

#[async_trait]
impl DocumentService for HttpDocumentAdapter {
    async fn list(&self) -> PortResult<Vec<Document>> {
        let records: Vec<DocumentRecord> = self.api.send_json(self.api.get("documents")).await?;
        Ok(records.into_iter().map(DocumentRecord::to_domain).collect())
    }

    /// Sends the file and title as `multipart/form-data`.
    async fn upload(&self, title: &str, file: &SelectedFile) -> PortResult<Document> {
        let part = Part::bytes(file.payload.to_vec())
            .file_name(file.name.clone())
            .mime_str(mime_for(&file.name))
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        let form = Form::new().part("file", part).text("title", title.to_string());

        let record: DocumentRecord = self
            .api
            .send_json(self.api.post("documents/upload").multipart(form))
            .await?;
        let document = record.to_domain();
        info!("Server stored '{}' as {}.", title, document.id);
        Ok(document)
    }

    async fn delete(&self, document_id: &str) -> PortResult<()> {
        self.api
            .send_empty(self.api.delete(&format!("documents/{}", document_id)))
            .await
    }
}

/// The content type sent with an uploaded file.
fn mime_for(file_name: &str) -> &'static str {
    let extension = file_name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("md") => "text/markdown",
        _ => "application/octet-stream",
    }
}
