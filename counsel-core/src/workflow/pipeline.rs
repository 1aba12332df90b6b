//! End-to-end review of one uploaded contract
//!
//! extract text -> coordinator -> report formatter -> notifier
//!
//! Extraction and coordinator failures abort the run and nothing is
//! rendered. A notification failure is recorded in the outcome and the
//! rendered report is still returned.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::extract::extract_text;
use crate::notify::{NotificationStatus, Notifier};
use crate::report::{format_report, DisplayBlock};
use crate::workflow::Coordinator;
use crate::{Error, Result};

/// Result of a successful review run
#[derive(Debug, Clone, Serialize)]
pub struct ReviewOutcome {
    /// Consolidated markdown as returned by the manager
    pub report: String,
    /// Display blocks derived from the report
    pub blocks: Vec<DisplayBlock>,
    /// What happened to the notification
    pub notification: NotificationStatus,
}

/// Runs one review per call; holds no per-run state
#[derive(Clone)]
pub struct ReviewPipeline {
    coordinator: Coordinator,
    notifier: Option<Arc<dyn Notifier>>,
}

impl ReviewPipeline {
    /// Create a pipeline; without a notifier notifications are skipped
    pub fn new(coordinator: Coordinator, notifier: Option<Arc<dyn Notifier>>) -> Self {
        Self {
            coordinator,
            notifier,
        }
    }

    /// Review an uploaded PDF
    ///
    /// `None` means no file was selected.
    pub async fn run(&self, pdf: Option<Vec<u8>>) -> Result<ReviewOutcome> {
        let pdf = pdf.ok_or(Error::NoContract)?;

        info!(bytes = pdf.len(), "Extracting contract text");
        let contract_text = tokio::task::spawn_blocking(move || extract_text(&pdf))
            .await
            .map_err(|e| Error::Extraction(format!("extraction task failed: {}", e)))??;

        self.review_text(&contract_text).await
    }

    /// Review already extracted contract text
    ///
    /// Empty text is reviewed like any other.
    pub async fn review_text(&self, contract_text: &str) -> Result<ReviewOutcome> {
        let report = self.coordinator.run(contract_text).await?;
        let blocks = format_report(&report);
        let notification = self.send_notification().await;

        Ok(ReviewOutcome {
            report,
            blocks,
            notification,
        })
    }

    async fn send_notification(&self) -> NotificationStatus {
        let Some(notifier) = &self.notifier else {
            return NotificationStatus::Skipped;
        };

        match notifier.notify().await {
            Ok(()) => {
                info!(notifier = notifier.name(), "Notification sent");
                NotificationStatus::Sent
            }
            Err(e) => {
                warn!(notifier = notifier.name(), error = %e, "Notification failed");
                NotificationStatus::Failed(e.to_string())
            }
        }
    }
}

impl std::fmt::Debug for ReviewPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewPipeline")
            .field("coordinator", &self.coordinator)
            .field("notifier", &self.notifier.as_ref().map(|n| n.name()))
            .finish()
    }
}
