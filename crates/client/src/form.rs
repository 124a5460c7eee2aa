//! Form-side state for the contact section.
//!
//! The UI binds its inputs to [`ContactForm`] and drives one submit cycle
//! at a time: `begin_submit` gates on the pending flag and on client-side
//! validation, `complete_submit` applies the outcome. Field values survive
//! every failure and are cleared only when the server acknowledges.

use butter_contract::{Acknowledgement, ContactSubmission, FieldError};

use crate::{SubmissionClient, SubmitError};

/// Toast raised after a submit cycle. At most one per cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Success { title: String, description: String },
    Error { title: String, description: String },
}

/// State of the contact form: field values, inline errors, the in-flight
/// flag, and the pending notification.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
    field_errors: Vec<FieldError>,
    pending: bool,
    notification: Option<Notification>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The submission the current field values describe. An untouched phone
    /// input stays off the wire.
    pub fn values(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: if self.phone.trim().is_empty() {
                None
            } else {
                Some(self.phone.clone())
            },
            company: self.company.clone(),
            message: self.message.clone(),
        }
    }

    /// Inline message for one field, if its last validation failed.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Whether a submission is in flight. The submit control is disabled
    /// while this is true.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Hands the notification to the UI, at most once per cycle.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    /// Starts a submit cycle.
    ///
    /// Returns the validated payload to send, or `None` when a submission
    /// is already pending or when client-side validation failed (in which
    /// case the inline errors are populated and nothing touches the
    /// network).
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.pending {
            return None;
        }
        self.field_errors.clear();
        self.notification = None;

        let candidate = self.values();
        if let Err(violations) = candidate.check() {
            self.field_errors = violations;
            return None;
        }

        self.pending = true;
        Some(candidate)
    }

    /// Ends the submit cycle started by [`begin_submit`](Self::begin_submit).
    ///
    /// Success clears the form and raises the success toast; any failure
    /// keeps the entered values so the user can correct and resend.
    pub fn complete_submit(&mut self, outcome: Result<Acknowledgement, SubmitError>) {
        self.pending = false;
        self.notification = Some(match outcome {
            Ok(_) => {
                self.clear_fields();
                Notification::Success {
                    title: "Message Sent!".to_string(),
                    description: "We'll get back to you shortly.".to_string(),
                }
            }
            Err(err) => Notification::Error {
                title: "Error sending message".to_string(),
                description: err.to_string(),
            },
        });
    }

    /// Runs one full submit cycle against the client. Returns whether a
    /// request was actually issued.
    pub async fn submit(&mut self, client: &SubmissionClient) -> bool {
        let Some(payload) = self.begin_submit() else {
            return false;
        };
        let outcome = client.submit(&payload).await;
        self.complete_submit(outcome);
        true
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.company.clear();
        self.message.clear();
        self.field_errors.clear();
    }
}
