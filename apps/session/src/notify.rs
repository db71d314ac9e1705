#[cfg(test)]
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Default,
    Destructive,
}

/// A toast: what the user is told after a session operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }
}

/// Where notifications go. The session never renders anything itself.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log. Used when nothing else is listening.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Default => {
                tracing::info!("{}: {}", notification.title, notification.description)
            }
            Severity::Destructive => {
                tracing::warn!("{}: {}", notification.title, notification.description)
            }
        }
    }
}

/// Collects notifications in order. Clones share the same buffer.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    seen: Arc<Mutex<Vec<Notification>>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().ok().and_then(|v| v.last().cloned())
    }
}

#[cfg(test)]
impl NotificationSink for RecordingSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order_across_clones() {
        let sink = RecordingSink::new();
        let other = sink.clone();
        sink.notify(Notification::success("Login successful", "Welcome back, jane!"));
        other.notify(Notification::success("Logged out", "bye"));

        let seen = sink.notifications();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].title, "Login successful");
        assert_eq!(sink.last().map(|n| n.title), Some("Logged out".to_string()));
    }

    #[test]
    fn test_severity_serializes_snake_case() {
        let json = serde_json::to_string(&Severity::Destructive).unwrap();
        assert_eq!(json, "\"destructive\"");
    }
}
