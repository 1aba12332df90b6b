//! Counsel WhatsApp - WhatsApp Cloud API notifications for Counsel
//!
//! This crate sends the templated "review complete" message through the
//! Graph API and plugs into the review pipeline as a `Notifier`.

mod client;
mod error;

pub use client::{TemplateMessage, WhatsAppClient};
pub use error::{Error, Result};
