//! CLI command implementations

pub mod config;
pub mod review;
pub mod serve;

pub use config::ConfigArgs;
pub use review::ReviewArgs;
pub use serve::ServeArgs;

use std::sync::Arc;

use counsel_core::{Config, Coordinator, MistralBackend, Notifier, ReviewPipeline, Secrets};
use counsel_whatsapp::WhatsAppClient;

/// Build the review pipeline from configuration and secrets
///
/// Both secrets must be present even when notifications are off.
pub fn build_pipeline(config: &Config, notify: bool) -> anyhow::Result<ReviewPipeline> {
    let credentials = Secrets::load()?.require()?;

    let backend = MistralBackend::new(&config.model, credentials.model_api_key)?;
    let coordinator = Coordinator::new(Arc::new(backend));

    let notifier: Option<Arc<dyn Notifier>> = if !notify {
        None
    } else if config.notifier.is_enabled() {
        let client = WhatsAppClient::new(&config.notifier, credentials.whatsapp_token)?;
        Some(Arc::new(client))
    } else {
        tracing::warn!(
            "WhatsApp notifications disabled: notifier.phone_number_id or notifier.recipient is not set"
        );
        None
    };

    Ok(ReviewPipeline::new(coordinator, notifier))
}
