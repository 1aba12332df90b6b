//! Role-specialized reviewer agents
//!
//! A reviewer embeds the full contract text in its instructions when it is
//! constructed. Invoking it sends those instructions to the model and returns
//! the free-form markdown it produces.

use tracing::{debug, info};

use crate::agent::{AgentRole, ChatModel, ChatRequest, PromptBuilder};
use crate::Result;

/// Task given to every reviewer as the user message
const REVIEW_TASK: &str =
    "Review the contract in your instructions and report your findings in markdown.";

/// A reviewer with its rendered instructions
#[derive(Debug, Clone)]
pub struct ReviewerAgent {
    role: AgentRole,
    instructions: String,
}

/// Output of one reviewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberReport {
    /// Role of the reviewer that wrote the report
    pub role: AgentRole,
    /// Markdown produced by the reviewer
    pub content: String,
}

impl ReviewerAgent {
    /// Create a reviewer for the given contract text
    pub fn new(role: AgentRole, contract_text: &str) -> Self {
        let instructions = PromptBuilder::new(role)
            .contract_text(contract_text)
            .build();

        Self { role, instructions }
    }

    /// Create all three reviewers for a contract
    pub fn team_for(contract_text: &str) -> Vec<Self> {
        AgentRole::reviewers()
            .iter()
            .map(|role| Self::new(*role, contract_text))
            .collect()
    }

    /// Get the role of this reviewer
    pub fn role(&self) -> AgentRole {
        self.role
    }

    /// Get the rendered instructions
    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    /// Run the review against a model
    pub async fn review(&self, model: &dyn ChatModel) -> Result<MemberReport> {
        debug!(role = %self.role, model = model.model_id(), "Invoking reviewer");

        let request = ChatRequest::new(self.instructions.clone(), REVIEW_TASK);
        let content = model.complete(&request).await?;

        info!(role = %self.role, chars = content.len(), "Reviewer finished");

        Ok(MemberReport {
            role: self.role,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use async_trait::async_trait;

    struct EchoModel;

    #[async_trait]
    impl ChatModel for EchoModel {
        fn model_id(&self) -> &str {
            "echo"
        }

        async fn complete(&self, request: &ChatRequest) -> Result<String> {
            Ok(request.system.lines().next().unwrap_or_default().to_string())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl ChatModel for FailingModel {
        fn model_id(&self) -> &str {
            "failing"
        }

        async fn complete(&self, _request: &ChatRequest) -> Result<String> {
            Err(Error::Model("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_instructions_embed_contract() {
        let reviewer = ReviewerAgent::new(AgentRole::Legal, "Clause 7: governing law is Morocco.");
        assert!(reviewer
            .instructions()
            .contains("Clause 7: governing law is Morocco."));
        assert_eq!(reviewer.role(), AgentRole::Legal);
    }

    #[test]
    fn test_team_for_builds_three_reviewers() {
        let team = ReviewerAgent::team_for("text");
        let roles: Vec<AgentRole> = team.iter().map(|r| r.role()).collect();
        assert_eq!(roles, AgentRole::reviewers());
    }

    #[tokio::test]
    async fn test_review_returns_model_output() {
        let reviewer = ReviewerAgent::new(AgentRole::Negotiation, "text");
        let report = reviewer.review(&EchoModel).await.unwrap();

        assert_eq!(report.role, AgentRole::Negotiation);
        assert_eq!(report.content, "# Contract Negotiation Strategist");
    }

    #[tokio::test]
    async fn test_review_propagates_model_error() {
        let reviewer = ReviewerAgent::new(AgentRole::Structuring, "text");
        let err = reviewer.review(&FailingModel).await.unwrap_err();
        assert!(matches!(err, Error::Model(_)));
    }
}
