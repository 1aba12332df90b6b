//! WhatsApp Cloud API client using reqwest

use async_trait::async_trait;
use counsel_core::config::NotifierConfig;
use counsel_core::Notifier;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::{Error, Result};

/// An approved message template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMessage {
    /// Template name as registered with WhatsApp
    pub name: String,
    /// Language code, e.g. `en_US`
    pub language_code: String,
}

/// Client that sends the review-complete template to one recipient
pub struct WhatsAppClient {
    client: Client,
    endpoint: Url,
    token: String,
    recipient: String,
    template: TemplateMessage,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    messaging_product: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    template: TemplatePayload<'a>,
}

#[derive(Serialize)]
struct TemplatePayload<'a> {
    name: &'a str,
    language: Language<'a>,
}

#[derive(Serialize)]
struct Language<'a> {
    code: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    #[serde(default)]
    messages: Vec<SentMessage>,
}

#[derive(Deserialize)]
struct SentMessage {
    id: String,
}

impl WhatsAppClient {
    /// Create a client from notifier configuration and an access token
    ///
    /// Fails when the phone number id or the recipient is missing.
    pub fn new(config: &NotifierConfig, token: impl Into<String>) -> Result<Self> {
        let phone_number_id = required(&config.phone_number_id, "phone_number_id")?;
        let recipient = required(&config.recipient, "recipient")?;

        let base = format!("{}/", config.base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&base)?.join(&format!(
            "{}/{}/messages",
            config.api_version.trim_matches('/'),
            phone_number_id
        ))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!(endpoint = %endpoint, "Created WhatsApp client");

        Ok(Self {
            client,
            endpoint,
            token: token.into(),
            recipient: recipient.to_string(),
            template: TemplateMessage {
                name: config.template_name.clone(),
                language_code: config.language_code.clone(),
            },
        })
    }

    /// Get the messages endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Get the configured template
    pub fn template(&self) -> &TemplateMessage {
        &self.template
    }

    /// Send the template message
    ///
    /// Only HTTP 200 counts as delivered.
    pub async fn send_template(&self) -> Result<()> {
        let body = SendRequest {
            messaging_product: "whatsapp",
            to: &self.recipient,
            kind: "template",
            template: TemplatePayload {
                name: &self.template.name,
                language: Language {
                    code: &self.template.language_code,
                },
            },
        };

        debug!(template = %self.template.name, "Sending WhatsApp template");

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if status != StatusCode::OK {
            return Err(Error::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let message_id = message_id_from(&text);
        info!(
            message_id = message_id.as_deref().unwrap_or("unknown"),
            "WhatsApp template sent"
        );
        Ok(())
    }
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::Config(format!("notifier.{} is not set", field)))
}

fn message_id_from(body: &str) -> Option<String> {
    let parsed: SendResponse = serde_json::from_str(body).ok()?;
    parsed.messages.into_iter().next().map(|m| m.id)
}

impl std::fmt::Debug for WhatsAppClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhatsAppClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Notifier for WhatsAppClient {
    fn name(&self) -> &'static str {
        "whatsapp"
    }

    async fn notify(&self) -> counsel_core::Result<()> {
        self.send_template().await.map_err(Into::into)
    }
}
