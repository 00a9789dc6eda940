//! Contact form field rules.
//!
//! DESIGN
//! ======
//! Every field maps to an ordered list of rules through an exhaustive match
//! on [`FieldId`]. The first failing rule decides the verdict. Validation is
//! pure; inline error indicators are rendered from the verdicts by the form
//! view.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Contact form inputs, keyed by their DOM `name`/`id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Company,
    Service,
    Message,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Company,
        FieldId::Service,
        FieldId::Message,
    ];

    /// Stable DOM key for this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Company => "company",
            FieldId::Service => "service",
            FieldId::Message => "message",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    #[must_use]
    pub fn is_required(self) -> bool {
        !self.rules().is_empty()
    }

    fn rules(self) -> &'static [Rule] {
        match self {
            FieldId::Name => &[
                Rule::Required("Name is required"),
                Rule::MinChars(2, "Name must be at least 2 characters"),
            ],
            FieldId::Email => &[
                Rule::Required("Email is required"),
                Rule::EmailShape("Please enter a valid email address"),
            ],
            FieldId::Company => &[],
            FieldId::Service => &[Rule::Required("Please select a service")],
            FieldId::Message => &[
                Rule::Required("Message is required"),
                Rule::MinChars(10, "Message must be at least 10 characters"),
            ],
        }
    }
}

/// Why a field failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldIssue {
    Required,
    TooShort { min: usize },
    InvalidFormat,
}

/// Outcome of validating one field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldVerdict {
    pub valid: bool,
    pub issue: Option<FieldIssue>,
    pub message: Option<&'static str>,
}

impl FieldVerdict {
    const PASS: Self = Self { valid: true, issue: None, message: None };

    fn fail(issue: FieldIssue, message: &'static str) -> Self {
        Self { valid: false, issue: Some(issue), message: Some(message) }
    }
}

#[derive(Clone, Copy, Debug)]
enum Rule {
    Required(&'static str),
    MinChars(usize, &'static str),
    EmailShape(&'static str),
}

impl Rule {
    fn check(self, value: &str) -> Option<FieldVerdict> {
        match self {
            Rule::Required(message) if value.is_empty() => Some(FieldVerdict::fail(FieldIssue::Required, message)),
            Rule::MinChars(min, message) if value.chars().count() < min => {
                Some(FieldVerdict::fail(FieldIssue::TooShort { min }, message))
            }
            Rule::EmailShape(message) if !is_email_shaped(value) => {
                Some(FieldVerdict::fail(FieldIssue::InvalidFormat, message))
            }
            _ => None,
        }
    }
}

/// Validate a single field. Surrounding whitespace is ignored.
#[must_use]
pub fn validate_field(field: FieldId, value: &str) -> FieldVerdict {
    let value = value.trim();
    field
        .rules()
        .iter()
        .find_map(|rule| rule.check(value))
        .unwrap_or(FieldVerdict::PASS)
}

/// `local@domain.tld`: no whitespace, exactly one `@`, a `.` after it with
/// text on both sides.
#[must_use]
pub fn is_email_shaped(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
