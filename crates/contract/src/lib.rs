//! Shared contract for the Butter contact-inquiry pipeline.
//!
//! The submission schema, response bodies, and endpoint descriptor live here
//! and nowhere else. The API service and the submission client both import
//! this crate, so what the form collects and what the server accepts cannot
//! drift apart.

mod endpoint;
mod submission;

pub use endpoint::{Acknowledgement, CreateContact, Endpoint, RejectionMessage};
pub use submission::{ContactSubmission, FieldError, SchemaError};
