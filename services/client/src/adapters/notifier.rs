//! services/client/src/adapters/notifier.rs
//!
//! Shows user notifications on the terminal, the CLI's stand-in for toasts.

use learning_assistant_core::ports::NotificationSink;
use tracing::debug;

#[derive(Clone, Default)]
pub struct ConsoleNotifier;

impl NotificationSink for ConsoleNotifier {
    fn notify_error(&self, message: &str) {
        debug!("error notification: {}", message);
        eprintln!("❌ {}", message);
    }

    fn notify_success(&self, message: &str) {
        debug!("success notification: {}", message);
        println!("✅ {}", message);
    }
}
