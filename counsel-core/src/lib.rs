//! Counsel Core - Core library for AI contract review
//!
//! This crate extracts contract text from PDFs, runs a team of
//! role-specialized reviewer agents and a manager over it, and formats the
//! consolidated markdown report for display.

pub mod agent;
pub mod config;
pub mod error;
pub mod extract;
pub mod notify;
pub mod report;
pub mod secrets;
pub mod workflow;

pub use agent::{AgentRole, ChatModel, ChatRequest, MistralBackend};
pub use config::Config;
pub use error::{Error, Result};
pub use notify::{NotificationStatus, Notifier};
pub use report::{format_report, render_body, split_sections, DisplayBlock, Section};
pub use secrets::{Credentials, Secrets};
pub use workflow::{Coordinator, ReviewOutcome, ReviewPipeline};
