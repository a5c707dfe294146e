//! crates/learning_assistant_core/src/dashboard.rs
//!
//! Fetches the progress dashboard and turns it into the stats tiles and the
//! merged recent-activity feed.

use crate::activity::{self, ActivityEntry};
use crate::domain::{Dashboard, Overview};
use crate::phase::{AsyncPhase, ClientError, Operation};
use crate::ports::{NotificationSink, ProgressService};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

const DASHBOARD_FAILED: &str = "Failed to fetch dashboard data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    /// Nothing to show: the fetch failed before any data arrived, or the
    /// service returned no overview.
    Unavailable,
    Ready {
        stats: [StatTile; 3],
        /// Most recent first. Empty means the "no recent activity" state.
        activity: Vec<ActivityEntry>,
    },
}

fn stat_tiles(overview: &Overview) -> [StatTile; 3] {
    [
        StatTile {
            label: "Total Documents",
            value: overview.total_documents,
        },
        StatTile {
            label: "Total Flashcards",
            value: overview.total_flashcards,
        },
        StatTile {
            label: "Total Quizzes",
            value: overview.total_quizzes,
        },
    ]
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub phase: AsyncPhase,
    pub data: Option<Dashboard>,
    settled: bool,
}

impl DashboardState {
    pub fn view(&self) -> DashboardView {
        if !self.settled {
            return DashboardView::Loading;
        }
        let Some(dashboard) = &self.data else {
            return DashboardView::Unavailable;
        };
        let Some(overview) = &dashboard.overview else {
            return DashboardView::Unavailable;
        };
        let recent = &dashboard.recent_activity;
        DashboardView::Ready {
            stats: stat_tiles(overview),
            activity: activity::merge(&recent.documents, &recent.quizzes),
        }
    }
}

pub struct DashboardLoader {
    service: Arc<dyn ProgressService>,
    notifier: Arc<dyn NotificationSink>,
    state: Mutex<DashboardState>,
}

impl DashboardLoader {
    pub fn new(service: Arc<dyn ProgressService>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            service,
            notifier,
            state: Mutex::new(DashboardState::default()),
        }
    }

    pub async fn state(&self) -> DashboardState {
        self.state.lock().await.clone()
    }

    /// Fetches the dashboard. A failure keeps whatever was loaded before.
    pub async fn load(&self) -> Result<(), ClientError> {
        self.state.lock().await.phase.begin(Operation::Dashboard)?;

        let outcome = self.service.dashboard().await.map_err(ClientError::from);

        let mut state = self.state.lock().await;
        state.settled = true;
        state.phase.settle(&outcome);
        match outcome {
            Ok(dashboard) => {
                info!(
                    "Dashboard loaded: {} documents and {} quizzes in recent activity.",
                    dashboard.recent_activity.documents.len(),
                    dashboard.recent_activity.quizzes.len()
                );
                state.data = Some(dashboard);
                Ok(())
            }
            Err(err) => {
                drop(state);
                error!("Failed to fetch dashboard: {:?}", err);
                self.notifier.notify_error(DASHBOARD_FAILED);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityKind;
    use crate::domain::{DocumentActivity, QuizActivity, RecentActivity};
    use crate::ports::PortError;
    use crate::testing::{FakeProgressService, RecordingNotifier};

    fn sample_dashboard() -> Dashboard {
        Dashboard {
            overview: Some(Overview {
                total_documents: 4,
                total_flashcards: 120,
                total_quizzes: 7,
            }),
            recent_activity: RecentActivity {
                documents: vec![DocumentActivity {
                    id: "d1".into(),
                    title: "Notes".into(),
                    last_accessed: Some("2024-01-02T10:00:00Z".into()),
                }],
                quizzes: vec![QuizActivity {
                    id: "q1".into(),
                    title: Some("Quiz 1".into()),
                    last_attempted: Some("2024-01-03T09:00:00Z".into()),
                }],
            },
        }
    }

    fn loader(
        result: Result<Dashboard, PortError>,
    ) -> (DashboardLoader, Arc<FakeProgressService>, Arc<RecordingNotifier>) {
        let service = Arc::new(FakeProgressService::returning(result));
        let notifier = Arc::new(RecordingNotifier::default());
        let loader = DashboardLoader::new(service.clone(), notifier.clone());
        (loader, service, notifier)
    }

    #[tokio::test]
    async fn ready_view_has_tiles_and_merged_feed() {
        let (loader, _, _) = loader(Ok(sample_dashboard()));
        assert_eq!(loader.state().await.view(), DashboardView::Loading);

        loader.load().await.unwrap();

        let DashboardView::Ready { stats, activity } = loader.state().await.view() else {
            panic!("expected a ready dashboard");
        };
        assert_eq!(stats.map(|s| s.value), [4, 120, 7]);
        assert_eq!(stats[1].label, "Total Flashcards");
        let kinds: Vec<_> = activity.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, [ActivityKind::Quiz, ActivityKind::Document]);
    }

    #[tokio::test]
    async fn missing_overview_is_unavailable() {
        let mut dashboard = sample_dashboard();
        dashboard.overview = None;
        let (loader, _, _) = loader(Ok(dashboard));

        loader.load().await.unwrap();
        assert_eq!(loader.state().await.view(), DashboardView::Unavailable);
    }

    #[tokio::test]
    async fn empty_activity_is_not_an_error() {
        let mut dashboard = sample_dashboard();
        dashboard.recent_activity = RecentActivity::default();
        let (loader, _, notifier) = loader(Ok(dashboard));

        loader.load().await.unwrap();

        let DashboardView::Ready { activity, .. } = loader.state().await.view() else {
            panic!("expected a ready dashboard");
        };
        assert!(activity.is_empty());
        assert!(notifier.errors().is_empty());
    }

    #[tokio::test]
    async fn failure_notifies_and_keeps_previous_data() {
        let (loader, service, notifier) = loader(Ok(sample_dashboard()));
        loader.load().await.unwrap();

        *service.dashboard.lock().unwrap() = Err(PortError::Unauthorized);
        let err = loader.load().await.unwrap_err();

        let state = loader.state().await;
        assert_eq!(err, ClientError::Unauthorized);
        assert_eq!(state.phase, AsyncPhase::Failed(ClientError::Unauthorized));
        assert!(matches!(state.view(), DashboardView::Ready { .. }));
        assert_eq!(notifier.errors(), [DASHBOARD_FAILED]);
    }

    #[tokio::test]
    async fn first_failure_is_unavailable() {
        let (loader, _, _) = loader(Err(PortError::Network("offline".into())));
        loader.load().await.unwrap_err();
        assert_eq!(loader.state().await.view(), DashboardView::Unavailable);
    }
}
