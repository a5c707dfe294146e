//! In-memory fakes of the service ports for unit tests.

use crate::domain::{Dashboard, Document, SelectedFile};
use crate::ports::{DocumentService, NotificationSink, PortError, PortResult, ProgressService};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn document(id: &str, title: &str) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        file_size: Some(2048),
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
        flashcard_count: None,
        quiz_count: None,
    }
}

/// Yields to the executor `times` times, standing in for network latency.
async fn latency(times: usize) {
    for _ in 0..times {
        tokio::task::yield_now().await;
    }
}

/// A document backend that stores documents in memory and counts calls.
#[derive(Default)]
pub struct FakeDocumentService {
    pub stored: Mutex<Vec<Document>>,
    pub list_calls: AtomicUsize,
    pub upload_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub list_error: Mutex<Option<PortError>>,
    pub upload_error: Mutex<Option<PortError>>,
    pub delete_error: Mutex<Option<PortError>>,
    /// Per-call latency for `list`, consumed front to back.
    pub list_latencies: Mutex<Vec<usize>>,
    pub upload_latency: usize,
    pub delete_latency: usize,
}

impl FakeDocumentService {
    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            stored: Mutex::new(documents),
            ..Default::default()
        }
    }

    pub fn fail_list(&self, err: PortError) {
        *self.list_error.lock().unwrap() = Some(err);
    }

    pub fn fail_upload(&self, err: PortError) {
        *self.upload_error.lock().unwrap() = Some(err);
    }

    pub fn fail_delete(&self, err: PortError) {
        *self.delete_error.lock().unwrap() = Some(err);
    }

    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentService for FakeDocumentService {
    async fn list(&self) -> PortResult<Vec<Document>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.list_error.lock().unwrap().clone() {
            return Err(err);
        }
        let snapshot = self.stored.lock().unwrap().clone();
        let delay = {
            let mut latencies = self.list_latencies.lock().unwrap();
            if latencies.is_empty() {
                0
            } else {
                latencies.remove(0)
            }
        };
        latency(delay).await;
        Ok(snapshot)
    }

    async fn upload(&self, title: &str, file: &SelectedFile) -> PortResult<Document> {
        let call = self.upload_calls.fetch_add(1, Ordering::SeqCst) + 1;
        latency(self.upload_latency).await;
        if let Some(err) = self.upload_error.lock().unwrap().clone() {
            return Err(err);
        }
        let mut doc = document(&format!("uploaded-{call}"), title);
        doc.file_size = Some(file.payload.len() as u64);
        doc.flashcard_count = Some(0);
        doc.quiz_count = Some(0);
        self.stored.lock().unwrap().push(doc.clone());
        Ok(doc)
    }

    async fn delete(&self, document_id: &str) -> PortResult<()> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        latency(self.delete_latency).await;
        if let Some(err) = self.delete_error.lock().unwrap().clone() {
            return Err(err);
        }
        self.stored.lock().unwrap().retain(|d| d.id != document_id);
        Ok(())
    }
}

pub struct FakeProgressService {
    pub dashboard: Mutex<PortResult<Dashboard>>,
    pub calls: AtomicUsize,
}

impl FakeProgressService {
    pub fn returning(result: PortResult<Dashboard>) -> Self {
        Self {
            dashboard: Mutex::new(result),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ProgressService for FakeProgressService {
    async fn dashboard(&self) -> PortResult<Dashboard> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.dashboard.lock().unwrap().clone()
    }
}

/// Records every notification instead of displaying it.
#[derive(Default)]
pub struct RecordingNotifier {
    pub errors: Mutex<Vec<String>>,
    pub successes: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }

    fn notify_success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }
}
