use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;

/// A contact inquiry as collected by the site's form and accepted by the API.
///
/// `phone` is the one optional field: one page variant collects it, the other
/// does not, and both validate against this schema. It is omitted from the
/// wire entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// A single violated constraint, addressable to a form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Why an input failed to parse as a [`ContactSubmission`].
///
/// `Malformed` is a structural failure (invalid JSON value shape: missing
/// field, wrong type). `Invalid` means the shape was right but one or more
/// field constraints failed; the violations are listed in declared-field
/// order.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("malformed submission: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{}", join_messages(.0))]
    Invalid(Vec<FieldError>),
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Declared order of the form's fields, used to sort violations so inline
/// messages always read top-to-bottom.
const FIELD_ORDER: &[&str] = &["name", "email", "phone", "company", "message"];

fn field_rank(field: &str) -> usize {
    FIELD_ORDER
        .iter()
        .position(|f| *f == field)
        .unwrap_or(FIELD_ORDER.len())
}

impl ContactSubmission {
    /// Validates an arbitrary JSON value against the schema, returning the
    /// typed submission or the violations.
    ///
    /// Both sides of the wire call this: the client right before
    /// serializing, the server on every request body it receives.
    pub fn parse(value: serde_json::Value) -> Result<Self, SchemaError> {
        let submission: ContactSubmission = serde_json::from_value(value)?;
        submission.check().map_err(SchemaError::Invalid)?;
        Ok(submission)
    }

    /// Validates an already-typed value, listing every violated field in
    /// declared order.
    pub fn check(&self) -> Result<(), Vec<FieldError>> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => {
                let mut violations: Vec<FieldError> = errors
                    .field_errors()
                    .into_iter()
                    .flat_map(|(field, errs)| {
                        let field = field.to_string();
                        errs.iter().map(move |e| FieldError {
                            field: field.clone(),
                            message: e
                                .message
                                .as_deref()
                                .map(str::to_string)
                                .unwrap_or_else(|| format!("{field} is invalid")),
                        })
                    })
                    .collect();
                violations.sort_by_key(|v| field_rank(&v.field));
                Err(violations)
            }
        }
    }
}
