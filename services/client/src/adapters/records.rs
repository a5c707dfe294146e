//! services/client/src/adapters/records.rs
//!
//! Wire records as the API serializes them. Each record converts into the pure
//! domain type from the core crate.

use chrono::{DateTime, Utc};
use learning_assistant_core::domain::{
    Dashboard, Document, DocumentActivity, Overview, QuizActivity, RecentActivity,
};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentRecord {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    file_size: Option<u64>,
    created_at: DateTime<Utc>,
    flashcard_count: Option<u32>,
    quiz_count: Option<u32>,
}
impl DocumentRecord {
    pub(crate) fn to_domain(self) -> Document {
        Document {
            id: self.id,
            title: self.title,
            file_size: self.file_size,
            created_at: self.created_at,
            flashcard_count: self.flashcard_count,
            quiz_count: self.quiz_count,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverviewRecord {
    #[serde(default)]
    total_documents: u64,
    #[serde(default)]
    total_flashcards: u64,
    #[serde(default)]
    total_quizzes: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DocumentActivityRecord {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    last_accessed: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizActivityRecord {
    #[serde(rename = "_id")]
    id: String,
    title: Option<String>,
    last_attempted: Option<String>,
}

#[derive(Deserialize, Default)]
struct RecentActivityRecord {
    #[serde(default)]
    documents: Vec<DocumentActivityRecord>,
    #[serde(default)]
    quizzes: Vec<QuizActivityRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DashboardRecord {
    overview: Option<OverviewRecord>,
    recent_activity: Option<RecentActivityRecord>,
}
impl DashboardRecord {
    pub(crate) fn to_domain(self) -> Dashboard {
        let recent = self.recent_activity.unwrap_or_default();
        Dashboard {
            overview: self.overview.map(|o| Overview {
                total_documents: o.total_documents,
                total_flashcards: o.total_flashcards,
                total_quizzes: o.total_quizzes,
            }),
            recent_activity: RecentActivity {
                documents: recent
                    .documents
                    .into_iter()
                    .map(|d| DocumentActivity {
                        id: d.id,
                        title: d.title,
                        last_accessed: d.last_accessed,
                    })
                    .collect(),
                quizzes: recent
                    .quizzes
                    .into_iter()
                    .map(|q| QuizActivity {
                        id: q.id,
                        title: q.title,
                        last_attempted: q.last_attempted,
                    })
                    .collect(),
            },
        }
    }
}
