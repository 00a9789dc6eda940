use super::*;

fn config() -> EmailJsConfig {
    EmailJsConfig {
        service_id: "service_abc".to_owned(),
        template_id: "template_def".to_owned(),
        public_key: "pk_123".to_owned(),
        to_email: Some("inbox@cloudninja.dev".to_owned()),
        endpoint: crate::config::DEFAULT_EMAILJS_ENDPOINT.to_owned(),
    }
}

fn payload(message: &str) -> ContactPayload {
    ContactPayload {
        name: "Grace Hopper".to_owned(),
        email: "grace@example.com".to_owned(),
        company: None,
        service: "devops".to_owned(),
        message: message.to_owned(),
    }
}

// =============================================================
// build_request
// =============================================================

#[test]
fn build_request_maps_config_ids() {
    let req = build_request(&config(), &payload("Please review our pipeline."));
    assert_eq!(req.service_id, "service_abc");
    assert_eq!(req.template_id, "template_def");
    assert_eq!(req.user_id, "pk_123");
    assert_eq!(req.template_params.to_email.as_deref(), Some("inbox@cloudninja.dev"));
    assert_eq!(req.template_params.company, "Not specified");
}

#[test]
fn build_request_serializes_emailjs_shape() {
    let req = build_request(&config(), &payload("Please review our pipeline."));
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["user_id"], "pk_123");
    assert_eq!(json["template_params"]["from_name"], "Grace Hopper");
    assert_eq!(json["template_params"]["reply_to"], "grace@example.com");
}

// =============================================================
// SendError
// =============================================================

#[test]
fn missing_config_is_configuration_error() {
    let err = SendError::from(ConfigError::Missing { var: "EMAILJS_PUBLIC_KEY" });
    assert!(err.is_configuration());
}

#[test]
fn rejected_client_statuses_are_configuration_errors() {
    for status in [400, 401, 403, 404] {
        let err = SendError::Rejected { status, body: "The Public Key is invalid".to_owned() };
        assert!(err.is_configuration(), "status {status}");
    }
}

#[test]
fn server_and_transport_failures_are_not_configuration_errors() {
    assert!(!SendError::Rejected { status: 500, body: String::new() }.is_configuration());
    assert!(!SendError::Rejected { status: 429, body: String::new() }.is_configuration());
    assert!(!SendError::Request("offline".to_owned()).is_configuration());
    assert!(!SendError::Encode("bad".to_owned()).is_configuration());
}

// =============================================================
// SetupSummary
// =============================================================

#[test]
fn setup_summary_truncates_message_to_preview() {
    let long = "x".repeat(250);
    let summary = SetupSummary::from_payload(&payload(&long));
    assert_eq!(summary.message_preview.len(), SUMMARY_MESSAGE_CHARS + 3);
    assert!(summary.message_preview.ends_with("..."));
}

#[test]
fn setup_summary_truncates_on_char_boundaries() {
    let long = "é".repeat(150);
    let summary = SetupSummary::from_payload(&payload(&long));
    assert_eq!(summary.message_preview.chars().count(), SUMMARY_MESSAGE_CHARS + 3);
}

#[test]
fn setup_summary_uses_company_fallback() {
    let summary = SetupSummary::from_payload(&payload("short note here"));
    assert_eq!(summary.company, "No company");
    assert_eq!(summary.message_preview, "short note here...");
}
