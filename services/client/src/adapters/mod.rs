pub mod documents;
pub mod notifier;
pub mod progress;
mod records;
pub mod session_store;
pub mod transport;

pub use documents::HttpDocumentAdapter;
pub use notifier::ConsoleNotifier;
pub use progress::HttpProgressAdapter;
pub use session_store::MemorySessionStore;
pub use transport::ApiClient;
