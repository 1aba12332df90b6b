//! Agent module for role-specialized contract reviewers

mod backend;
mod prompts;
mod reviewer;
mod types;

pub use backend::{ChatModel, ChatRequest, MistralBackend};
pub use prompts::{get_template, render, PromptBuilder, PromptContext};
pub use reviewer::{MemberReport, ReviewerAgent};
pub use types::AgentRole;
