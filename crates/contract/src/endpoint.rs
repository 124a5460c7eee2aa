use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use validator::Validate;

use crate::submission::ContactSubmission;

/// Acknowledgement returned when a submission is accepted.
///
/// `id` is an opaque string on the wire; consumers must not assume any
/// particular grammar for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Acknowledgement {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

/// Body of a validation rejection. Every error status the API emits carries
/// this shape, so one parse covers them all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectionMessage {
    pub message: String,
}

/// A type-level description of one HTTP operation: method, path, and the
/// schema for the request body plus each response status.
///
/// The server wires its route from these constants and the client issues its
/// request from the same ones; neither side restates the contract.
///
/// Status codes are plain `u16` rather than a `StatusCode` type so this
/// crate works on both sides of the `http` 0.2 / 1.x boundary.
pub trait Endpoint {
    const METHOD: &'static str;
    const PATH: &'static str;
    /// Status returned when the input is accepted.
    const CREATED: u16;
    /// Status returned when the input fails validation.
    const REJECTED: u16;

    type Input: Serialize + DeserializeOwned + Validate;
    type Created: Serialize + DeserializeOwned;
    type Rejection: Serialize + DeserializeOwned;
}

/// `POST /api/contact`: submit a contact inquiry.
pub struct CreateContact;

impl Endpoint for CreateContact {
    const METHOD: &'static str = "POST";
    const PATH: &'static str = "/api/contact";
    const CREATED: u16 = 201;
    const REJECTED: u16 = 400;

    type Input = ContactSubmission;
    type Created = Acknowledgement;
    type Rejection = RejectionMessage;
}
