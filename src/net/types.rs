//! Wire types for the contact form send path.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;

/// Validated contact form contents handed to the send operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub service: String,
    pub message: String,
}

/// Body of `POST /api/v1.0/email/send`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailJsRequest {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
    pub template_params: TemplateParams,
}

/// Variables referenced by the EmailJS template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_email: Option<String>,
    pub from_name: String,
    pub from_email: String,
    pub company: String,
    pub service: String,
    pub message: String,
    pub reply_to: String,
}

impl TemplateParams {
    pub const COMPANY_FALLBACK: &'static str = "Not specified";

    #[must_use]
    pub fn from_payload(payload: &ContactPayload, to_email: Option<&str>) -> Self {
        Self {
            to_email: to_email.map(str::to_owned),
            from_name: payload.name.clone(),
            from_email: payload.email.clone(),
            company: payload
                .company
                .clone()
                .unwrap_or_else(|| Self::COMPANY_FALLBACK.to_owned()),
            service: payload.service.clone(),
            message: payload.message.clone(),
            reply_to: payload.email.clone(),
        }
    }
}
