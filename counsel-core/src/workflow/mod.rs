//! Workflow module for running contract reviews
//!
//! The coordinator runs the reviewer team and the manager; the pipeline
//! wraps it with text extraction, report formatting and notification.

pub mod coordinator;
pub mod pipeline;

pub use coordinator::Coordinator;
pub use pipeline::{ReviewOutcome, ReviewPipeline};
