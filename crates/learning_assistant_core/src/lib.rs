pub mod activity;
pub mod dashboard;
pub mod documents;
pub mod domain;
pub mod format;
pub mod phase;
pub mod ports;
pub mod routes;
pub mod session;

#[cfg(test)]
mod testing;

pub use activity::{merge, ActivityEntry, ActivityKind};
pub use dashboard::{DashboardLoader, DashboardState, DashboardView, StatTile};
pub use documents::{DocumentCard, DocumentCollectionManager, DocumentListState, DocumentListView};
pub use domain::{
    Dashboard, Document, DocumentActivity, Overview, QuizActivity, RecentActivity, SelectedFile,
    UploadDraft, User,
};
pub use phase::{AsyncPhase, ClientError, Operation};
pub use ports::{
    DocumentService, NotificationSink, PortError, PortResult, ProgressService, SessionStore,
};
pub use session::{AuthContext, AuthState, GuardDecision, RouteGuard};
