//! User-notification interface.
//!
//! The page controller reports mutation outcomes through a
//! [`NotificationSink`]; the concrete rendering (toast, banner, console)
//! is an external collaborator. The crate ships a tracing-backed sink for
//! headless use.

use tracing::{error, info};

/// The kind of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// An operation completed successfully.
    Success,
    /// An operation failed; the application stays interactive.
    Error,
}

/// Capability for surfacing user-facing notifications.
///
/// Implementations must be cheap; sinks are called inline from the
/// controller.
pub trait NotificationSink: Send + Sync {
    /// Surfaces one notification to the user.
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// A [`NotificationSink`] that renders notifications as tracing events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => info!(message, "notification"),
            NotificationKind::Error => error!(message, "notification"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSink {
        seen: Mutex<Vec<(NotificationKind, String)>>,
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, kind: NotificationKind, message: &str) {
            self.seen.lock().unwrap().push((kind, message.to_string()));
        }
    }

    #[test]
    fn test_sink_is_object_safe() {
        let sink: Box<dyn NotificationSink> = Box::new(RecordingSink::default());
        sink.notify(NotificationKind::Success, "saved");
    }

    #[test]
    fn test_tracing_notifier_does_not_panic() {
        TracingNotifier.notify(NotificationKind::Success, "ok");
        TracingNotifier.notify(NotificationKind::Error, "failed");
    }
}
