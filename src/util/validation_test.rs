use super::*;

// =============================================================
// name
// =============================================================

#[test]
fn name_empty_is_required() {
    let verdict = validate_field(FieldId::Name, "");
    assert!(!verdict.valid);
    assert_eq!(verdict.issue, Some(FieldIssue::Required));
    assert_eq!(verdict.message, Some("Name is required"));
}

#[test]
fn name_single_char_is_too_short() {
    let verdict = validate_field(FieldId::Name, "A");
    assert!(!verdict.valid);
    assert_eq!(verdict.issue, Some(FieldIssue::TooShort { min: 2 }));
    assert_eq!(verdict.message, Some("Name must be at least 2 characters"));
}

#[test]
fn name_two_chars_is_valid() {
    let verdict = validate_field(FieldId::Name, "Al");
    assert!(verdict.valid);
    assert!(verdict.message.is_none());
}

#[test]
fn name_whitespace_only_is_required() {
    let verdict = validate_field(FieldId::Name, "   ");
    assert_eq!(verdict.issue, Some(FieldIssue::Required));
}

#[test]
fn name_padding_does_not_count_toward_length() {
    assert_eq!(validate_field(FieldId::Name, "  A  ").issue, Some(FieldIssue::TooShort { min: 2 }));
}

#[test]
fn name_length_counts_chars_not_bytes() {
    assert!(validate_field(FieldId::Name, "Zoë").valid);
    assert!(!validate_field(FieldId::Name, "é").valid);
}

// =============================================================
// email
// =============================================================

#[test]
fn email_empty_is_required() {
    let verdict = validate_field(FieldId::Email, "");
    assert_eq!(verdict.issue, Some(FieldIssue::Required));
    assert_eq!(verdict.message, Some("Email is required"));
}

#[test]
fn email_without_tld_is_invalid() {
    let verdict = validate_field(FieldId::Email, "foo@bar");
    assert!(!verdict.valid);
    assert_eq!(verdict.issue, Some(FieldIssue::InvalidFormat));
    assert_eq!(verdict.message, Some("Please enter a valid email address"));
}

#[test]
fn email_with_tld_is_valid() {
    assert!(validate_field(FieldId::Email, "foo@bar.com").valid);
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in ["foo", "@bar.com", "foo@.com", "foo@bar.", "fo o@bar.com", "foo@b@r.com", "foo@bar .com"] {
        assert!(!is_email_shaped(bad), "{bad} should be rejected");
    }
}

#[test]
fn email_shape_accepts_subdomains_and_plus_tags() {
    for good in ["a@b.co", "first.last+tag@mail.example.org", "x@y.z"] {
        assert!(is_email_shaped(good), "{good} should be accepted");
    }
}

#[test]
fn email_surrounding_whitespace_is_trimmed() {
    assert!(validate_field(FieldId::Email, "  foo@bar.com ").valid);
}

// =============================================================
// service / message / company
// =============================================================

#[test]
fn service_empty_selection_is_required() {
    let verdict = validate_field(FieldId::Service, "");
    assert_eq!(verdict.issue, Some(FieldIssue::Required));
    assert_eq!(verdict.message, Some("Please select a service"));
}

#[test]
fn service_any_selection_is_valid() {
    assert!(validate_field(FieldId::Service, "cloud-migration").valid);
}

#[test]
fn message_nine_chars_is_too_short() {
    let verdict = validate_field(FieldId::Message, "123456789");
    assert_eq!(verdict.issue, Some(FieldIssue::TooShort { min: 10 }));
    assert_eq!(verdict.message, Some("Message must be at least 10 characters"));
}

#[test]
fn message_ten_chars_is_valid() {
    assert!(validate_field(FieldId::Message, "1234567890").valid);
}

#[test]
fn message_empty_reports_required_before_length() {
    assert_eq!(validate_field(FieldId::Message, "").message, Some("Message is required"));
}

#[test]
fn company_is_always_valid() {
    assert!(validate_field(FieldId::Company, "").valid);
    assert!(validate_field(FieldId::Company, "x").valid);
    assert!(!FieldId::Company.is_required());
}

// =============================================================
// FieldId
// =============================================================

#[test]
fn field_keys_round_trip() {
    for field in FieldId::ALL {
        assert_eq!(FieldId::from_key(field.key()), Some(field));
    }
    assert_eq!(FieldId::from_key("phone"), None);
}

#[test]
fn validation_is_deterministic() {
    let samples = ["", "A", "Al", "foo@bar", "foo@bar.com", "123456789", "1234567890"];
    for field in FieldId::ALL {
        for value in samples {
            assert_eq!(validate_field(field, value), validate_field(field, value));
        }
    }
}
