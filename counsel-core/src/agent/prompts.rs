//! Agent prompt templates
//!
//! This module provides embedded prompt templates for each agent role.
//! Templates use `{{VARIABLE}}` placeholders that can be rendered with context.

use crate::agent::AgentRole;
use std::collections::HashMap;

/// Embedded prompt templates for each role
const STRUCTURING_PROMPT: &str = include_str!("prompts/structuring.md");
const LEGAL_PROMPT: &str = include_str!("prompts/legal.md");
const NEGOTIATION_PROMPT: &str = include_str!("prompts/negotiation.md");
const MANAGER_PROMPT: &str = include_str!("prompts/manager.md");

/// Substituted for placeholders that have no value
const NOT_SPECIFIED: &str = "(not specified)";

/// Get the raw prompt template for a role
pub fn get_template(role: AgentRole) -> &'static str {
    match role {
        AgentRole::Structuring => STRUCTURING_PROMPT,
        AgentRole::Legal => LEGAL_PROMPT,
        AgentRole::Negotiation => NEGOTIATION_PROMPT,
        AgentRole::Manager => MANAGER_PROMPT,
    }
}

/// Context for rendering a prompt template
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    variables: HashMap<String, String>,
}

impl PromptContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Set a variable value (builder pattern)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set the full contract text
    pub fn with_contract_text(self, text: impl Into<String>) -> Self {
        self.with("CONTRACT_TEXT", text)
    }

    /// Set the current date and time
    pub fn with_datetime(self, datetime: impl Into<String>) -> Self {
        self.with("CURRENT_DATETIME", datetime)
    }
}

/// Render a role's template with the given context
pub fn render(role: AgentRole, context: &PromptContext) -> String {
    render_template(get_template(role), context)
}

/// Render a template string with variable substitution
///
/// Substituted values are not scanned again, so placeholder-like text inside
/// a contract is left as written. Unset placeholders become "(not specified)".
fn render_template(template: &str, context: &PromptContext) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) if is_placeholder(&after[..end]) => {
                let value = context
                    .variables
                    .get(&after[..end])
                    .map(String::as_str)
                    .unwrap_or(NOT_SPECIFIED);
                result.push_str(value);
                rest = &after[end + 2..];
            }
            _ => {
                result.push_str("{{");
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

fn is_placeholder(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_uppercase() || c == '_')
}

/// Build a complete prompt for an agent
pub struct PromptBuilder {
    role: AgentRole,
    context: PromptContext,
}

impl PromptBuilder {
    /// Create a new prompt builder for the given role
    pub fn new(role: AgentRole) -> Self {
        Self {
            role,
            context: PromptContext::new(),
        }
    }

    /// Set the contract text
    pub fn contract_text(mut self, text: impl Into<String>) -> Self {
        self.context = self.context.with_contract_text(text);
        self
    }

    /// Set the current date and time (for the manager)
    pub fn datetime(mut self, datetime: impl Into<String>) -> Self {
        self.context = self.context.with_datetime(datetime);
        self
    }

    /// Set a custom variable
    pub fn var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context = self.context.with(key, value);
        self
    }

    /// Build the final prompt
    pub fn build(self) -> String {
        render(self.role, &self.context)
    }
}
