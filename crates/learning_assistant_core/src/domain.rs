//! crates/learning_assistant_core/src/domain.rs
//!
//! Defines the pure, core data structures for the client.
//! These structs are independent of any transport or serialization format.

use bytes::Bytes;
use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

/// Matches the last extension of a file name (`report.v2.pdf` -> `.pdf`).
static FILE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[^/.]+$").expect("static extension regex is valid"));

/// A document owned by the current user, as confirmed by the Document Service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub file_size: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub flashcard_count: Option<u32>,
    pub quiz_count: Option<u32>,
}

/// The file picked in the upload dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub payload: Bytes,
}

/// The transient state of the upload dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadDraft {
    pub file: Option<SelectedFile>,
    pub title: String,
}

impl UploadDraft {
    /// Stores the picked file and re-derives the title from its name.
    pub fn select_file(&mut self, name: impl Into<String>, payload: Bytes) {
        let name = name.into();
        self.title = title_from_file_name(&name);
        self.file = Some(SelectedFile { name, payload });
    }

    /// The title trimmed of surrounding whitespace, if anything is left.
    pub fn effective_title(&self) -> Option<&str> {
        let trimmed = self.title.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Strips the last extension from a file name.
pub fn title_from_file_name(name: &str) -> String {
    FILE_EXTENSION.replace(name, "").into_owned()
}

// Represents a signed-in user - provided by the session store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
}

/// A recently accessed document as reported by the Progress Service.
/// The timestamp is kept raw; parsing happens when the feed is merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentActivity {
    pub id: String,
    pub title: String,
    pub last_accessed: Option<String>,
}

/// A recently attempted quiz as reported by the Progress Service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizActivity {
    pub id: String,
    pub title: Option<String>,
    pub last_attempted: Option<String>,
}

/// Aggregate totals shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overview {
    pub total_documents: u64,
    pub total_flashcards: u64,
    pub total_quizzes: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentActivity {
    pub documents: Vec<DocumentActivity>,
    pub quizzes: Vec<QuizActivity>,
}

/// The payload of the Progress Service dashboard call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dashboard {
    pub overview: Option<Overview>,
    pub recent_activity: RecentActivity,
}
