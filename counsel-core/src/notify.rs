//! Notification seam
//!
//! A notifier is fired once after a report has been rendered. Its failure is
//! reported to the user but never hides the report.

use async_trait::async_trait;
use serde::Serialize;

use crate::Result;

/// Sends the "review complete" notification
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Get the name of this notifier
    fn name(&self) -> &'static str;

    /// Send the notification
    async fn notify(&self) -> Result<()>;
}

/// What happened to the notification of one review
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum NotificationStatus {
    /// Delivered
    Sent,
    /// No notifier configured
    Skipped,
    /// Delivery failed; the report is unaffected
    Failed(String),
}

impl NotificationStatus {
    /// Human-readable status line
    pub fn message(&self) -> String {
        match self {
            NotificationStatus::Sent => "Notification sent successfully.".to_string(),
            NotificationStatus::Skipped => {
                "Notification skipped: no recipient configured.".to_string()
            }
            NotificationStatus::Failed(reason) => {
                format!("Failed to send the notification: {}", reason)
            }
        }
    }

    /// Whether the notification failed
    pub fn is_failure(&self) -> bool {
        matches!(self, NotificationStatus::Failed(_))
    }
}
