//! crates/learning_assistant_core/src/documents.rs
//!
//! The Document Collection Manager: owns the user's document list for the
//! current session and drives the load, upload and delete workflows.
//!
//! Every workflow is gated by its own `AsyncPhase`. The state lock is only held
//! between network calls, never across one, so the UI can keep interacting
//! (closing dialogs, reloading) while a request is in flight.

use crate::domain::{Document, UploadDraft};
use crate::format;
use crate::phase::{AsyncPhase, ClientError, Operation};
use crate::ports::{DocumentService, NotificationSink, PortError};
use crate::routes;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

const LOAD_FAILED: &str = "Failed to fetch documents.";
const MISSING_UPLOAD_INPUT: &str = "Please provide a title and select a file.";
const UPLOAD_SUCCEEDED: &str = "Document uploaded successfully";
const UPLOAD_FAILED: &str = "Upload failed.";
const DELETE_FAILED: &str = "Failed to delete document.";

//=========================================================================================
// State and Render Model
//=========================================================================================

/// Everything the documents screen renders from.
#[derive(Debug, Clone, Default)]
pub struct DocumentListState {
    pub documents: Vec<Document>,
    pub load_phase: AsyncPhase,
    pub upload_phase: AsyncPhase,
    pub delete_phase: AsyncPhase,
    /// `Some` while the upload dialog is open.
    pub upload_dialog: Option<UploadDraft>,
    /// `Some` while the delete confirmation prompt is open.
    pub pending_delete: Option<Document>,
    first_load_settled: bool,
    load_ticket: u64,
    upload_dialog_ticket: u64,
}

/// A document as shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCard {
    pub id: String,
    pub title: String,
    /// "N/A" when the server did not report a size.
    pub size_label: String,
    pub flashcard_count: Option<u32>,
    pub quiz_count: Option<u32>,
    pub created_label: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentListView {
    Loading,
    Empty,
    Documents(Vec<DocumentCard>),
}

impl DocumentListState {
    pub fn view(&self, now: DateTime<Utc>) -> DocumentListView {
        if !self.first_load_settled {
            return DocumentListView::Loading;
        }
        if self.documents.is_empty() {
            return DocumentListView::Empty;
        }
        let cards = self
            .documents
            .iter()
            .map(|doc| DocumentCard {
                id: doc.id.clone(),
                title: doc.title.clone(),
                size_label: format::file_size(doc.file_size),
                flashcard_count: doc.flashcard_count,
                quiz_count: doc.quiz_count,
                created_label: format::relative_age(doc.created_at, now),
                link: routes::document(&doc.id),
            })
            .collect();
        DocumentListView::Documents(cards)
    }

    /// Whether the upload submit and cancel controls should be disabled.
    pub fn is_uploading(&self) -> bool {
        self.upload_phase.is_in_flight()
    }

    /// Whether the delete confirm and cancel controls should be disabled.
    pub fn is_deleting(&self) -> bool {
        self.delete_phase.is_in_flight()
    }
}

//=========================================================================================
// The Manager
//=========================================================================================

pub struct DocumentCollectionManager {
    service: Arc<dyn DocumentService>,
    notifier: Arc<dyn NotificationSink>,
    state: Mutex<DocumentListState>,
}

impl DocumentCollectionManager {
    pub fn new(service: Arc<dyn DocumentService>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            service,
            notifier,
            state: Mutex::new(DocumentListState::default()),
        }
    }

    /// A snapshot of the current state for rendering.
    pub async fn state(&self) -> DocumentListState {
        self.state.lock().await.clone()
    }

    pub async fn documents(&self) -> Vec<Document> {
        self.state.lock().await.documents.clone()
    }

    // --- Load ---

    /// Replaces the collection with the server's list.
    ///
    /// On failure the previous collection stays visible. If another load is
    /// issued while this one is in flight, only the later one applies.
    pub async fn load(&self) -> Result<(), ClientError> {
        let ticket = {
            let mut state = self.state.lock().await;
            state.load_phase = AsyncPhase::InFlight;
            state.load_ticket += 1;
            state.load_ticket
        };

        debug!("Fetching document list.");
        let outcome = self.service.list().await.map_err(ClientError::from);

        let mut state = self.state.lock().await;
        if state.load_ticket != ticket {
            debug!("Discarding superseded document list.");
            return outcome.map(|_| ());
        }
        state.first_load_settled = true;
        state.load_phase.settle(&outcome);

        match outcome {
            Ok(documents) => {
                info!("Loaded {} documents.", documents.len());
                state.documents = documents;
                Ok(())
            }
            Err(err) => {
                drop(state);
                error!("Failed to fetch documents: {:?}", err);
                self.notifier.notify_error(LOAD_FAILED);
                Err(err)
            }
        }
    }

    // --- Upload dialog ---

    pub async fn open_upload(&self) {
        let mut state = self.state.lock().await;
        if state.upload_dialog.is_none() {
            state.upload_phase.reset();
            state.upload_dialog = Some(UploadDraft::default());
            state.upload_dialog_ticket += 1;
        }
    }

    /// Closes the dialog and discards the draft. A request already in flight
    /// keeps running but will no longer touch the dialog.
    pub async fn close_upload(&self) {
        let mut state = self.state.lock().await;
        if state.upload_dialog.take().is_some() {
            state.upload_dialog_ticket += 1;
        }
    }

    pub async fn select_file(&self, name: impl Into<String>, payload: Bytes) {
        let mut state = self.state.lock().await;
        match state.upload_dialog.as_mut() {
            Some(draft) => draft.select_file(name, payload),
            None => debug!("Ignoring file selection; upload dialog is closed."),
        }
    }

    pub async fn set_upload_title(&self, title: impl Into<String>) {
        let mut state = self.state.lock().await;
        match state.upload_dialog.as_mut() {
            Some(draft) => draft.title = title.into(),
            None => debug!("Ignoring title edit; upload dialog is closed."),
        }
    }

    /// Uploads whatever the dialog currently holds.
    pub async fn submit_upload(&self) -> Result<Document, ClientError> {
        let draft = self
            .state
            .lock()
            .await
            .upload_dialog
            .clone()
            .unwrap_or_default();
        self.upload(draft).await
    }

    // --- Upload ---

    /// Validates and submits a draft, then refetches the collection.
    ///
    /// The new document is never spliced in locally: its id and derived counts
    /// are assigned by the server. On failure the dialog and draft are kept so
    /// the user can retry.
    pub async fn upload(&self, draft: UploadDraft) -> Result<Document, ClientError> {
        let (title, file) = match (draft.effective_title(), draft.file.as_ref()) {
            (Some(title), Some(file)) => (title.to_string(), file.clone()),
            _ => {
                warn!("Upload rejected: missing title or file.");
                self.notifier.notify_error(MISSING_UPLOAD_INPUT);
                return Err(ClientError::Validation(MISSING_UPLOAD_INPUT.to_string()));
            }
        };

        let dialog_ticket = {
            let mut state = self.state.lock().await;
            state.upload_phase.begin(Operation::Upload)?;
            state.upload_dialog_ticket
        };

        info!("Uploading '{}' ({} bytes).", title, file.payload.len());
        let outcome = self
            .service
            .upload(&title, &file)
            .await
            .map_err(ClientError::from);

        let dismissed = {
            let mut state = self.state.lock().await;
            state.upload_phase.settle(&outcome);
            let dismissed = state.upload_dialog_ticket != dialog_ticket;
            if outcome.is_ok() && !dismissed {
                state.upload_dialog = None;
                state.upload_dialog_ticket += 1;
            }
            dismissed
        };

        match outcome {
            Ok(document) => {
                info!("Uploaded document {}.", document.id);
                if !dismissed {
                    self.notifier.notify_success(UPLOAD_SUCCEEDED);
                }
                // A failed refresh has already been reported by `load`.
                if let Err(err) = self.load().await {
                    warn!("Refresh after upload failed: {:?}", err);
                }
                Ok(document)
            }
            Err(err) => {
                error!("Upload failed: {:?}", err);
                if dismissed {
                    warn!("Upload dialog was closed before the failure arrived.");
                } else {
                    self.notifier.notify_error(&err.user_message(UPLOAD_FAILED));
                }
                Err(err)
            }
        }
    }

    // --- Delete ---

    /// Opens the confirmation prompt for `document`.
    pub async fn request_delete(&self, document: Document) {
        let mut state = self.state.lock().await;
        state.delete_phase.reset();
        state.pending_delete = Some(document);
    }

    pub async fn cancel_delete(&self) {
        self.state.lock().await.pending_delete = None;
    }

    /// Deletes the pending target and removes it from the collection.
    ///
    /// The removal is applied to the collection as it is when the server
    /// answers, so a reload that finished in the meantime is respected.
    /// A target the server no longer knows is treated as deleted.
    pub async fn confirm_delete(&self) -> Result<(), ClientError> {
        let target = {
            let mut state = self.state.lock().await;
            let Some(target) = state.pending_delete.clone() else {
                debug!("Delete confirmed with no pending target.");
                return Ok(());
            };
            state.delete_phase.begin(Operation::Delete)?;
            target
        };

        info!("Deleting document {}.", target.id);
        let outcome = match self.service.delete(&target.id).await {
            Ok(()) => Ok(()),
            Err(PortError::NotFound(_)) => {
                info!("Document {} was already gone.", target.id);
                Ok(())
            }
            Err(err) => Err(ClientError::from(err)),
        };

        let prompt_open = {
            let mut state = self.state.lock().await;
            state.delete_phase.settle(&outcome);
            let prompt_open = state
                .pending_delete
                .as_ref()
                .is_some_and(|pending| pending.id == target.id);
            if outcome.is_ok() {
                state.documents.retain(|doc| doc.id != target.id);
                if prompt_open {
                    state.pending_delete = None;
                }
            }
            prompt_open
        };

        match outcome {
            Ok(()) => {
                self.notifier
                    .notify_success(&format!("'{}' deleted.", target.title));
                Ok(())
            }
            Err(err) => {
                error!("Failed to delete document {}: {:?}", target.id, err);
                if prompt_open {
                    self.notifier.notify_error(&err.user_message(DELETE_FAILED));
                } else {
                    warn!("Delete prompt was dismissed before the failure arrived.");
                }
                Err(err)
            }
        }
    }
}
