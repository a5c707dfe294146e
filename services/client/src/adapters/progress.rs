//! services/client/src/adapters/progress.rs
//!
//! This module contains the HTTP adapter for the Progress Service.
//! It implements the `ProgressService` port from the `core` crate.

use crate::adapters::records::DashboardRecord;
use crate::adapters::transport::ApiClient;
use async_trait::async_trait;
use learning_assistant_core::domain::Dashboard;
use learning_assistant_core::ports::{PortResult, ProgressService};

/// An adapter that implements the `ProgressService` port over the REST API.
#[derive(Clone)]
pub struct HttpProgressAdapter {
    api: ApiClient,
}

impl HttpProgressAdapter {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProgressService for HttpProgressAdapter {
    async fn dashboard(&self) -> PortResult<Dashboard> {
        let record: DashboardRecord = self
            .api
            .send_json(self.api.get("progress/dashboard"))
            .await?;
        Ok(record.to_domain())
    }
}
