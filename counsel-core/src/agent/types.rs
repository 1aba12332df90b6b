//! Agent role definitions for Counsel
//!
//! Each role has its own prompt template:
//! - Structuring: evaluates organization and clarity of the contract
//! - Legal: identifies legal issues, risks and jurisdiction
//! - Negotiation: finds negotiable or unbalanced clauses
//! - Manager: consolidates the three reviews into one report

use std::fmt;

/// The role an agent plays in a contract review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentRole {
    /// Contract structuring expert
    Structuring,
    /// Legal framework analyst
    Legal,
    /// Negotiation strategist
    Negotiation,
    /// Manager that writes the consolidated report
    Manager,
}

impl AgentRole {
    /// The reviewer roles, in the order they are reported to the manager
    pub fn reviewers() -> &'static [AgentRole] {
        &[
            AgentRole::Structuring,
            AgentRole::Legal,
            AgentRole::Negotiation,
        ]
    }

    /// Get the short name for this role
    pub fn name(&self) -> &'static str {
        match self {
            AgentRole::Structuring => "structuring",
            AgentRole::Legal => "legal",
            AgentRole::Negotiation => "negotiation",
            AgentRole::Manager => "manager",
        }
    }

    /// Get the display name of the agent playing this role
    pub fn display_name(&self) -> &'static str {
        match self {
            AgentRole::Structuring => "Contract Structuring Expert",
            AgentRole::Legal => "Legal Framework Analyst",
            AgentRole::Negotiation => "Contract Negotiation Strategist",
            AgentRole::Manager => "Contract Manager Team",
        }
    }

    /// Whether this role reviews the contract directly
    pub fn is_reviewer(&self) -> bool {
        !matches!(self, AgentRole::Manager)
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names() {
        assert_eq!(AgentRole::Structuring.name(), "structuring");
        assert_eq!(AgentRole::Legal.name(), "legal");
        assert_eq!(AgentRole::Negotiation.name(), "negotiation");
        assert_eq!(AgentRole::Manager.name(), "manager");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(AgentRole::Legal.to_string(), "legal");
    }

    #[test]
    fn test_reviewers_exclude_manager() {
        let reviewers = AgentRole::reviewers();
        assert_eq!(reviewers.len(), 3);
        assert!(reviewers.iter().all(|r| r.is_reviewer()));
        assert!(!AgentRole::Manager.is_reviewer());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            AgentRole::Structuring.display_name(),
            "Contract Structuring Expert"
        );
        assert_eq!(AgentRole::Manager.display_name(), "Contract Manager Team");
    }
}
