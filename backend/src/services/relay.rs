//! Outbound form relays
//!
//! Contact and newsletter submissions are forwarded to external form
//! endpoints. The backend never stores these messages; a failed
//! upstream call surfaces as an upstream error.

use crate::config::RelayConfig;
use crate::error::ApiError;
use nomadic_performance_shared::types::{ContactRequest, NewsletterRequest};
use nomadic_performance_shared::validation::validate_email;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

/// HTTP client for the configured relay endpoints
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    config: RelayConfig,
}

impl RelayClient {
    /// Build a client with the configured request timeout
    pub fn new(config: RelayConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, config })
    }

    /// Forward a contact form submission
    pub async fn send_contact(&self, request: &ContactRequest) -> Result<(), ApiError> {
        validate_email(&request.from_email).map_err(ApiError::Validation)?;

        if request.from_name.trim().is_empty() {
            return Err(ApiError::Validation("Name cannot be empty".to_string()));
        }
        if request.message.trim().is_empty() {
            return Err(ApiError::Validation("Message cannot be empty".to_string()));
        }

        let payload = json!({
            "to_email": self.config.contact_to_email,
            "from_name": request.from_name,
            "from_email": request.from_email,
            "phone": request.phone,
            "subject": request.subject,
            "service": request.service,
            "message": request.message,
        });

        self.dispatch(&self.config.contact_url, &payload, "contact")
            .await
    }

    /// Forward a newsletter signup
    pub async fn send_newsletter(&self, request: &NewsletterRequest) -> Result<(), ApiError> {
        validate_email(&request.email).map_err(ApiError::Validation)?;

        let payload = json!({ "email": request.email });

        self.dispatch(&self.config.newsletter_url, &payload, "newsletter")
            .await
    }

    async fn dispatch(
        &self,
        url: &str,
        payload: &serde_json::Value,
        kind: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                warn!(kind, error = %e, "Relay request failed");
                ApiError::External(format!("{} relay unreachable", kind))
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(kind, status = %status, "Relay rejected submission");
            return Err(ApiError::External(format!(
                "{} relay returned {}",
                kind, status
            )));
        }

        info!(kind, "Relayed submission");
        Ok(())
    }
}
