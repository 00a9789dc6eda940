//! Contact form values, inline errors, and the submission lifecycle.
//!
//! DESIGN
//! ======
//! The form view feeds discrete inputs (`input`, `blur`, `submit`,
//! `complete`) into one [`ContactFormState`] and renders whatever it holds.
//! The async send is not owned here: `submit` hands back the payload to send
//! and `complete` takes the result, so the state machine stays synchronous
//! and testable.
//!
//! `Idle -> Submitting -> (Succeeded | Failed) -> Idle`. The terminal state
//! is reported in the returned [`Completion`]; control is back at `Idle`
//! as soon as `complete` returns.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::collections::BTreeMap;

use crate::net::emailjs::SendError;
use crate::net::types::ContactPayload;
use crate::state::notification::NotificationKind;
use crate::util::validation::{FieldId, validate_field};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again or contact us directly.";

/// Lifecycle of one submit attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Current text of every form input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

impl FormValues {
    #[must_use]
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Company => &self.company,
            FieldId::Service => &self.service,
            FieldId::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        let slot = match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Company => &mut self.company,
            FieldId::Service => &mut self.service,
            FieldId::Message => &mut self.message,
        };
        *slot = value;
    }

    /// Trimmed payload. Only meaningful after every field validated.
    #[must_use]
    pub fn to_payload(&self) -> ContactPayload {
        let company = self.company.trim();
        ContactPayload {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            company: (!company.is_empty()).then(|| company.to_owned()),
            service: self.service.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

/// Inline error messages keyed by field. Absent means no indicator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldId, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn get(&self, field: FieldId) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self, field: FieldId) {
        self.0.remove(&field);
    }

    /// Record the verdict for `field`, returning whether it passed.
    pub fn apply(&mut self, field: FieldId, value: &str) -> bool {
        let verdict = validate_field(field, value);
        match verdict.message {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
        verdict.valid
    }
}

/// What the view should do after a submit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    /// All fields passed; send this payload.
    Send(ContactPayload),
    /// At least one field failed; errors are recorded.
    Invalid,
    /// A send is already in flight; the event was ignored.
    Busy,
}

/// User-facing outcome of a finished send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub terminal: SubmissionState,
    pub message: &'static str,
    pub kind: NotificationKind,
    /// Set when the failure stems from EmailJS configuration.
    pub setup_guide: Option<ContactPayload>,
}

/// One mounted contact form.
#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    pub values: FormValues,
    pub errors: FieldErrors,
    submission: SubmissionState,
    in_flight: Option<ContactPayload>,
}

impl ContactFormState {
    #[must_use]
    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }

    /// Store typed text and drop the field's stale error.
    pub fn input(&mut self, field: FieldId, value: String) {
        self.values.set(field, value);
        self.errors.clear(field);
    }

    /// Validate one field when it loses focus.
    pub fn blur(&mut self, field: FieldId) -> bool {
        let value = self.values.get(field).to_owned();
        self.errors.apply(field, &value)
    }

    /// Validate every field and, if all pass, enter `Submitting`.
    pub fn submit(&mut self) -> SubmitDecision {
        if self.is_submitting() {
            return SubmitDecision::Busy;
        }

        let mut all_valid = true;
        for field in FieldId::ALL {
            let value = self.values.get(field).to_owned();
            all_valid &= self.errors.apply(field, &value);
        }
        if !all_valid {
            return SubmitDecision::Invalid;
        }

        let payload = self.values.to_payload();
        self.submission = SubmissionState::Submitting;
        self.in_flight = Some(payload.clone());
        SubmitDecision::Send(payload)
    }

    /// Apply the send result. Returns `None` when no send was in flight.
    pub fn complete(&mut self, result: Result<(), SendError>) -> Option<Completion> {
        if !self.is_submitting() {
            return None;
        }
        let payload = self.in_flight.take();

        let completion = match result {
            Ok(()) => {
                self.values = FormValues::default();
                self.errors = FieldErrors::default();
                Completion {
                    terminal: SubmissionState::Succeeded,
                    message: SUCCESS_MESSAGE,
                    kind: NotificationKind::Success,
                    setup_guide: None,
                }
            }
            Err(err) => {
                log::error!("contact form send failed: {err}");
                Completion {
                    terminal: SubmissionState::Failed,
                    message: FAILURE_MESSAGE,
                    kind: NotificationKind::Error,
                    setup_guide: payload.filter(|_| err.is_configuration()),
                }
            }
        };

        self.submission = SubmissionState::Idle;
        Some(completion)
    }
}
