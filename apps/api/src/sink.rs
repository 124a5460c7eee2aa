use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use butter_contract::{Acknowledgement, ContactSubmission};
use serde_json::json;
use tracing::{debug, info};

use crate::config::Config;

const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);

/// Where an accepted submission goes after acknowledgement.
///
/// Downstream handling of a lead (CRM, mailbox, spreadsheet) is an operator
/// concern; the API guarantees exactly one delivery attempt per accepted
/// submission and nothing more.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn deliver(
        &self,
        submission: &ContactSubmission,
        ack: &Acknowledgement,
    ) -> Result<()>;
}

/// Default sink: the accepted lead is recorded in the service log.
pub struct LogSink;

#[async_trait]
impl LeadSink for LogSink {
    async fn deliver(
        &self,
        submission: &ContactSubmission,
        ack: &Acknowledgement,
    ) -> Result<()> {
        info!(
            id = %ack.id,
            name = %submission.name,
            email = %submission.email,
            company = %submission.company,
            "lead accepted"
        );
        Ok(())
    }
}

/// Forwards each accepted lead to an operator-supplied URL as JSON.
/// Single attempt with a bounded timeout; a refusal fails the submission.
pub struct WebhookSink {
    http: reqwest::Client,
    url: String,
}

impl WebhookSink {
    pub fn new(url: String) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(WEBHOOK_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            url,
        }
    }
}

#[async_trait]
impl LeadSink for WebhookSink {
    async fn deliver(
        &self,
        submission: &ContactSubmission,
        ack: &Acknowledgement,
    ) -> Result<()> {
        let response = self
            .http
            .post(&self.url)
            .json(&json!({
                "submission": submission,
                "acknowledgement": ack,
            }))
            .send()
            .await
            .context("lead webhook unreachable")?;

        if !response.status().is_success() {
            bail!("lead webhook returned status {}", response.status());
        }

        debug!(id = %ack.id, "lead forwarded to webhook");
        Ok(())
    }
}

/// Builds the sink the configuration asks for.
pub fn from_config(config: &Config) -> Arc<dyn LeadSink> {
    match &config.lead_webhook_url {
        Some(url) => {
            info!("Lead sink: webhook");
            Arc::new(WebhookSink::new(url.clone()))
        }
        None => {
            info!("Lead sink: log only");
            Arc::new(LogSink)
        }
    }
}
