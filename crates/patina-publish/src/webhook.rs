//! Lifecycle webhook notifications.
//!
//! Each publish phase fires one HTTP POST against a fixed URL keyed by the
//! project identifier. Response bodies are discarded; any transport error or
//! non-2xx status fails the notification, which aborts the pipeline.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;

use crate::config::WebhookConfig;

const USER_AGENT: &str = concat!("patina/", env!("CARGO_PKG_VERSION"));

/// Publish lifecycle phases, in the order they are announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Remote content pull is about to start
    PullStarted,
    /// Static-site build is about to start
    BuildStarted,
    /// The build result has been published
    Published,
}

impl LifecycleEvent {
    /// URL path segment for this event.
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::PullStarted => "pull-started",
            LifecycleEvent::BuildStarted => "build-started",
            LifecycleEvent::Published => "published",
        }
    }
}

/// Sends lifecycle notifications to the project-management webhook.
pub struct WebhookNotifier {
    client: Client,
    base_url: String,
    project: String,
}

impl WebhookNotifier {
    pub fn new(config: &WebhookConfig) -> Result<Self, WebhookError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| WebhookError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project: config.project.clone(),
        })
    }

    /// Notify the webhook of a lifecycle event.
    ///
    /// The response body is discarded, but the status is checked: the caller
    /// treats any failure here as fatal.
    pub async fn notify(&self, event: LifecycleEvent) -> Result<(), WebhookError> {
        let url = format!("{}/{}/{}", self.base_url, self.project, event.as_str());

        tracing::debug!(url = %url, "Sending lifecycle notification");

        self.client
            .post(&url)
            .json(&json!({ "project": self.project, "event": event.as_str() }))
            .send()
            .await
            .map_err(|e| WebhookError::Request {
                event: event.as_str(),
                message: e.to_string(),
            })?
            .error_for_status()
            .map_err(|e| WebhookError::Status {
                event: event.as_str(),
                message: e.to_string(),
            })?;

        tracing::info!(event = event.as_str(), "Webhook notified");
        Ok(())
    }
}

/// Errors that can occur when notifying a webhook.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Webhook request for '{event}' failed: {message}")]
    Request {
        event: &'static str,
        message: String,
    },

    #[error("Webhook for '{event}' returned an error status: {message}")]
    Status {
        event: &'static str,
        message: String,
    },
}
