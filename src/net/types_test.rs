use super::*;

fn payload(company: Option<&str>) -> ContactPayload {
    ContactPayload {
        name: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        company: company.map(str::to_owned),
        service: "cloud-migration".to_owned(),
        message: "We need help moving to the cloud.".to_owned(),
    }
}

#[test]
fn template_params_reply_to_mirrors_sender_email() {
    let params = TemplateParams::from_payload(&payload(Some("Analytical Engines")), None);
    assert_eq!(params.from_email, "ada@example.com");
    assert_eq!(params.reply_to, "ada@example.com");
    assert_eq!(params.from_name, "Ada Lovelace");
    assert_eq!(params.company, "Analytical Engines");
}

#[test]
fn template_params_missing_company_uses_fallback() {
    let params = TemplateParams::from_payload(&payload(None), None);
    assert_eq!(params.company, "Not specified");
}

#[test]
fn template_params_omit_to_email_when_unset() {
    let params = TemplateParams::from_payload(&payload(None), None);
    let json = serde_json::to_value(&params).unwrap();
    assert!(json.get("to_email").is_none());
    assert_eq!(json["service"], "cloud-migration");
}

#[test]
fn template_params_include_to_email_when_set() {
    let params = TemplateParams::from_payload(&payload(None), Some("inbox@cloudninja.dev"));
    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(json["to_email"], "inbox@cloudninja.dev");
}
