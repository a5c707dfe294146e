//! crates/learning_assistant_core/src/activity.rs
//!
//! Merges the two recent-activity feeds (document accesses and quiz attempts)
//! into a single feed ordered from most to least recent.

use crate::domain::{DocumentActivity, QuizActivity};
use crate::routes;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const UNTITLED_QUIZ: &str = "Untitled Quiz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Document,
    Quiz,
}

impl ActivityKind {
    /// The lead-in shown before the entry description.
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Document => "Accessed Document",
            ActivityKind::Quiz => "Attempted Quiz",
        }
    }
}

/// A display-ready feed entry. Entries are identified by `(kind, id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub id: String,
    pub kind: ActivityKind,
    pub description: String,
    /// `None` when the source timestamp was missing or unparsable.
    pub timestamp: Option<DateTime<Utc>>,
    pub link: String,
}

impl From<&DocumentActivity> for ActivityEntry {
    fn from(doc: &DocumentActivity) -> Self {
        Self {
            id: doc.id.clone(),
            kind: ActivityKind::Document,
            description: doc.title.clone(),
            timestamp: doc.last_accessed.as_deref().and_then(parse_timestamp),
            link: routes::document(&doc.id),
        }
    }
}

impl From<&QuizActivity> for ActivityEntry {
    fn from(quiz: &QuizActivity) -> Self {
        let description = quiz
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(UNTITLED_QUIZ)
            .to_string();
        Self {
            id: quiz.id.clone(),
            kind: ActivityKind::Quiz,
            description,
            timestamp: quiz.last_attempted.as_deref().and_then(parse_timestamp),
            link: routes::quiz(&quiz.id),
        }
    }
}

/// Builds the combined feed, most recent first.
///
/// Documents are placed before quizzes and the sort is stable, so entries with
/// equal timestamps keep that order. Entries without a usable timestamp sort last.
pub fn merge(documents: &[DocumentActivity], quizzes: &[QuizActivity]) -> Vec<ActivityEntry> {
    let mut entries: Vec<ActivityEntry> = documents
        .iter()
        .map(ActivityEntry::from)
        .chain(quizzes.iter().map(ActivityEntry::from))
        .collect();

    // Option orders None below any Some, so reversing the comparison puts
    // undated entries at the end.
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries
}

/// Parses the timestamp forms the Progress Service is known to emit.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, title: &str, at: Option<&str>) -> DocumentActivity {
        DocumentActivity {
            id: id.to_string(),
            title: title.to_string(),
            last_accessed: at.map(str::to_string),
        }
    }

    fn quiz(id: &str, title: Option<&str>, at: Option<&str>) -> QuizActivity {
        QuizActivity {
            id: id.to_string(),
            title: title.map(str::to_string),
            last_attempted: at.map(str::to_string),
        }
    }

    fn ids(entries: &[ActivityEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn empty_feeds_merge_to_nothing() {
        assert!(merge(&[], &[]).is_empty());
    }

    #[test]
    fn more_recent_quiz_comes_first() {
        let docs = [doc("d1", "Notes", Some("2024-01-02T10:00:00Z"))];
        let quizzes = [quiz("q1", Some("Quiz 1"), Some("2024-01-03T09:00:00Z"))];

        let feed = merge(&docs, &quizzes);

        assert_eq!(ids(&feed), ["q1", "d1"]);
        assert_eq!(feed[0].kind, ActivityKind::Quiz);
        assert_eq!(feed[0].link, "/quizzes/q1");
        assert_eq!(feed[1].kind, ActivityKind::Document);
        assert_eq!(feed[1].description, "Notes");
        assert_eq!(feed[1].link, "/documents/d1");
    }

    #[test]
    fn output_keeps_every_entry_sorted_descending() {
        let docs = [
            doc("d1", "A", Some("2024-03-01T08:00:00Z")),
            doc("d2", "B", Some("2024-01-01T08:00:00Z")),
            doc("d3", "C", Some("2024-02-01T08:00:00+02:00")),
        ];
        let quizzes = [
            quiz("q1", None, Some("2024-02-15T00:00:00Z")),
            quiz("q2", Some("Q"), Some("2023-12-31T23:59:59Z")),
        ];

        let feed = merge(&docs, &quizzes);

        assert_eq!(feed.len(), docs.len() + quizzes.len());
        assert!(feed.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        assert_eq!(ids(&feed), ["d1", "q1", "d3", "d2", "q2"]);
    }

    #[test]
    fn ties_keep_documents_ahead_of_quizzes() {
        let at = Some("2024-05-05T12:00:00Z");
        let docs = [doc("d1", "A", at), doc("d2", "B", at)];
        let quizzes = [quiz("q1", Some("Q"), at)];

        assert_eq!(ids(&merge(&docs, &quizzes)), ["d1", "d2", "q1"]);
    }

    #[test]
    fn undated_entries_sort_as_oldest() {
        let docs = [
            doc("missing", "A", None),
            doc("garbage", "B", Some("yesterday-ish")),
            doc("old", "C", Some("1999-01-01T00:00:00Z")),
        ];

        let feed = merge(&docs, &[]);

        assert_eq!(ids(&feed), ["old", "missing", "garbage"]);
        assert_eq!(feed[1].timestamp, None);
    }

    #[test]
    fn untitled_quiz_gets_a_fallback_description() {
        let quizzes = [quiz("q1", None, None), quiz("q2", Some(""), None)];
        let feed = merge(&[], &quizzes);
        assert!(feed.iter().all(|e| e.description == UNTITLED_QUIZ));
    }

    #[test]
    fn same_id_in_both_feeds_is_kept_twice() {
        let at = Some("2024-01-01T00:00:00Z");
        let feed = merge(&[doc("x", "Doc", at)], &[quiz("x", Some("Quiz"), at)]);

        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].kind, ActivityKind::Document);
        assert_eq!(feed[1].kind, ActivityKind::Quiz);
    }

    #[test]
    fn parses_naive_and_date_only_forms_as_utc() {
        let expected = parse_timestamp("2024-01-02T00:00:00Z");
        assert_eq!(parse_timestamp("2024-01-02T00:00:00.000"), expected);
        assert_eq!(parse_timestamp("2024-01-02"), expected);
        assert_eq!(parse_timestamp(""), None);
    }
}
