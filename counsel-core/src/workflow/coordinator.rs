//! Coordinator for the contract review team
//!
//! The coordinator:
//! 1. Builds the three reviewers with the contract embedded in their instructions
//! 2. Runs them concurrently
//! 3. Hands their reports to the manager, which writes the consolidated report
//!
//! Any failure aborts the whole run; there are no retries and reviewer output
//! is never returned on its own.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use tracing::info;

use crate::agent::{AgentRole, ChatModel, ChatRequest, MemberReport, PromptBuilder, ReviewerAgent};
use crate::Result;

/// Runs the reviewer team and the manager against one model backend
#[derive(Clone)]
pub struct Coordinator {
    model: Arc<dyn ChatModel>,
}

impl Coordinator {
    /// Create a coordinator using the given model for every agent
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Produce the consolidated markdown report for a contract
    pub async fn run(&self, contract_text: &str) -> Result<String> {
        let reviewers = ReviewerAgent::team_for(contract_text);

        info!(
            reviewers = reviewers.len(),
            model = self.model.model_id(),
            contract_chars = contract_text.len(),
            "Running contract review team"
        );

        let reports = try_join_all(
            reviewers
                .iter()
                .map(|reviewer| reviewer.review(self.model.as_ref())),
        )
        .await?;

        let request = manager_request(contract_text, &reports, Utc::now());
        let report = self.model.complete(&request).await?;

        info!(chars = report.len(), "Manager produced consolidated report");
        Ok(report)
    }
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("model", &self.model.model_id())
            .finish()
    }
}

/// Build the manager's request from the contract and the member reports
pub(crate) fn manager_request(
    contract_text: &str,
    reports: &[MemberReport],
    now: DateTime<Utc>,
) -> ChatRequest {
    let instructions = PromptBuilder::new(AgentRole::Manager)
        .datetime(now.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .build();

    let mut user = format!("## Contract\n\n{}\n\n## Specialist reports\n", contract_text);
    for report in reports {
        user.push_str(&format!(
            "\n### {}\n\n{}\n",
            report.role.display_name(),
            report.content.trim()
        ));
    }

    ChatRequest::new(instructions, user)
}
