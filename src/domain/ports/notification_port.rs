//! User notification port definition.

/// Severity of an operator-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Port for transient operator-facing notices.
///
/// Workflows and use cases never call this themselves; they return values
/// and errors, and the presentation layer decides what to surface.
pub trait NotificationPort: Send + Sync {
    /// Shows a notice to the operator.
    fn send(&self, level: NoticeLevel, message: &str);

    /// Shows an informational notice.
    fn info(&self, message: &str) {
        self.send(NoticeLevel::Info, message);
    }

    /// Shows a success notice.
    fn success(&self, message: &str) {
        self.send(NoticeLevel::Success, message);
    }

    /// Shows a warning notice.
    fn warn(&self, message: &str) {
        self.send(NoticeLevel::Warning, message);
    }

    /// Shows an error notice.
    fn error(&self, message: &str) {
        self.send(NoticeLevel::Error, message);
    }
}

#[cfg(test)]
#[allow(dead_code)]
pub mod mock {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    pub struct MockNotificationPort {
        pub notices: Arc<Mutex<Vec<(NoticeLevel, String)>>>,
    }

    impl MockNotificationPort {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl NotificationPort for MockNotificationPort {
        fn send(&self, level: NoticeLevel, message: &str) {
            self.notices
                .lock()
                .unwrap()
                .push((level, message.to_string()));
        }
    }
}
