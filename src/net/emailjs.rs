//! EmailJS delivery for the contact form.
//!
//! Client-side (csr): real HTTP call via `gloo-net` to the EmailJS REST API.
//! Host builds: `send_contact` reports a request error so callers exercise
//! the failure path instead of panicking.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`SendError`]. The form turns it into an
//! error notification and, for configuration problems, the setup guide.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

use crate::config::{ConfigError, EmailJsConfig};

use super::types::{ContactPayload, EmailJsRequest, TemplateParams};

/// Characters of the message shown in the setup guide summary.
pub const SUMMARY_MESSAGE_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// Build-time configuration is incomplete.
    #[error("email delivery is not configured: {0}")]
    NotConfigured(#[from] ConfigError),

    /// The request never produced a response.
    #[error("email request failed: {0}")]
    Request(String),

    /// EmailJS answered with a non-success status.
    #[error("email service rejected the message: status {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The request body could not be serialized.
    #[error("email request encode failed: {0}")]
    Encode(String),
}

impl SendError {
    /// Whether the failure points at missing or wrong EmailJS settings rather
    /// than a transient problem. EmailJS answers unknown service/template ids
    /// and bad public keys with 400/401/403/404.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        match self {
            SendError::NotConfigured(_) => true,
            SendError::Rejected { status, .. } => matches!(status, 400 | 401 | 403 | 404),
            SendError::Request(_) | SendError::Encode(_) => false,
        }
    }
}

/// Assemble the EmailJS request for a payload.
#[must_use]
pub fn build_request(config: &EmailJsConfig, payload: &ContactPayload) -> EmailJsRequest {
    EmailJsRequest {
        service_id: config.service_id.clone(),
        template_id: config.template_id.clone(),
        user_id: config.public_key.clone(),
        template_params: TemplateParams::from_payload(payload, config.to_email.as_deref()),
    }
}

/// Send a contact payload through EmailJS.
///
/// # Errors
///
/// Returns [`SendError::NotConfigured`] when `config` is an error, otherwise
/// transport and status failures from the EmailJS call.
pub async fn send_contact(
    config: Result<EmailJsConfig, ConfigError>,
    payload: &ContactPayload,
) -> Result<(), SendError> {
    let config = config?;
    let request = build_request(&config, payload);

    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.endpoint)
            .json(&request)
            .map_err(|e| SendError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| SendError::Request(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SendError::Rejected { status, body });
        }
        log::info!("contact message delivered via {}", request.service_id);
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(SendError::Request("not available outside the browser".to_owned()))
    }
}

/// Snapshot of a submission shown in the setup guide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupSummary {
    pub email: String,
    pub name: String,
    pub company: String,
    pub service: String,
    pub message_preview: String,
}

impl SetupSummary {
    pub const COMPANY_FALLBACK: &'static str = "No company";

    #[must_use]
    pub fn from_payload(payload: &ContactPayload) -> Self {
        let preview: String = payload.message.chars().take(SUMMARY_MESSAGE_CHARS).collect();
        Self {
            email: payload.email.clone(),
            name: payload.name.clone(),
            company: payload
                .company
                .clone()
                .unwrap_or_else(|| Self::COMPANY_FALLBACK.to_owned()),
            service: payload.service.clone(),
            message_preview: format!("{preview}..."),
        }
    }
}

/// Variables the EmailJS template must reference.
pub const TEMPLATE_VARIABLES: &[&str] = &["from_name", "from_email", "company", "service", "message", "reply_to"];
