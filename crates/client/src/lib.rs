//! Submission client for the Butter contact endpoint.
//!
//! One validated attempt per call: re-parse against the shared schema,
//! POST, then branch on the status codes the endpoint descriptor names.
//! Nothing here retries; a failed submission is handed back to the form
//! layer and the user re-triggers it.

pub mod form;

use butter_contract::{
    Acknowledgement, ContactSubmission, CreateContact, Endpoint, RejectionMessage, SchemaError,
};
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// How one submission attempt failed.
///
/// The three variants are the three failure classes the form surfaces:
/// pre-network validation, a validation rejection the server explained, and
/// everything else (transport faults, unexpected statuses, unparseable
/// bodies), which displays as the one generic message.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The input failed the shared schema locally; no request was issued.
    #[error("{0}")]
    Invalid(#[from] SchemaError),

    /// The server rejected the submission and said why.
    #[error("{0}")]
    Rejected(String),

    /// Transport failure, unexpected status, or an unreadable body.
    #[error("Failed to send message")]
    Failed(#[source] Option<reqwest::Error>),
}

/// HTTP client bound to the [`CreateContact`] contract.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: reqwest::Client,
    base_url: String,
}

impl SubmissionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Performs one validated submission attempt.
    ///
    /// The input is parsed against the shared schema before serializing,
    /// even though the form layer already ran the same check: the wire must
    /// never carry a payload the contract would refuse.
    pub async fn submit(
        &self,
        input: &ContactSubmission,
    ) -> Result<Acknowledgement, SubmitError> {
        let raw = serde_json::to_value(input).map_err(SchemaError::Malformed)?;
        let validated = ContactSubmission::parse(raw)?;

        let url = format!("{}{}", self.base_url, CreateContact::PATH);
        debug!(%url, "submitting contact inquiry");

        let response = self
            .http
            .post(&url)
            .json(&validated)
            .send()
            .await
            .map_err(|e| SubmitError::Failed(Some(e)))?;

        match response.status().as_u16() {
            s if s == CreateContact::CREATED => response
                .json::<Acknowledgement>()
                .await
                .map_err(|e| SubmitError::Failed(Some(e))),
            s if s == CreateContact::REJECTED => {
                let rejection: RejectionMessage = response
                    .json()
                    .await
                    .map_err(|e| SubmitError::Failed(Some(e)))?;
                Err(SubmitError::Rejected(rejection.message))
            }
            _ => Err(SubmitError::Failed(None)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn inquiry() -> ContactSubmission {
        ContactSubmission {
            name: "Dana Whitfield".to_string(),
            email: "dana@acme.com".to_string(),
            phone: None,
            company: "Acme Holdings".to_string(),
            message: "We need a VP of Engineering by Q3.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_created_resolves_with_acknowledgement() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/contact")
            .match_header("content-type", "application/json")
            .match_body(mockito::Matcher::Json(json!({
                "name": "Dana Whitfield",
                "email": "dana@acme.com",
                "company": "Acme Holdings",
                "message": "We need a VP of Engineering by Q3."
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"abc123","createdAt":"2024-01-01T00:00:00Z"}"#)
            .create_async()
            .await;

        let client = SubmissionClient::new(server.url());
        let ack = client.submit(&inquiry()).await.unwrap();

        assert_eq!(ack.id, "abc123");
        assert_eq!(ack.created_at.to_rfc3339(), "2024-01-01T00:00:00+00:00");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejection_carries_server_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/contact")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"email already submitted"}"#)
            .create_async()
            .await;

        let client = SubmissionClient::new(server.url());
        let err = client.submit(&inquiry()).await.unwrap_err();

        match err {
            SubmitError::Rejected(message) => assert_eq!(message, "email already submitted"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_generic_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/contact")
            .with_status(500)
            .create_async()
            .await;

        let client = SubmissionClient::new(server.url());
        let err = client.submit(&inquiry()).await.unwrap_err();

        assert!(matches!(err, SubmitError::Failed(_)));
        assert_eq!(err.to_string(), "Failed to send message");
    }

    #[tokio::test]
    async fn test_rejection_with_unparseable_body_is_generic_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/contact")
            .with_status(400)
            .with_body("<html>bad gateway</html>")
            .create_async()
            .await;

        let client = SubmissionClient::new(server.url());
        let err = client.submit(&inquiry()).await.unwrap_err();

        assert!(matches!(err, SubmitError::Failed(Some(_))));
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_the_network() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/contact")
            .expect(0)
            .create_async()
            .await;

        let mut bad = inquiry();
        bad.email = "not-an-address".to_string();

        let client = SubmissionClient::new(server.url());
        let err = client.submit(&bad).await.unwrap_err();

        assert!(matches!(err, SubmitError::Invalid(_)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url_is_tolerated() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/contact")
            .with_status(201)
            .with_body(r#"{"id":"x","createdAt":"2024-01-01T00:00:00Z"}"#)
            .create_async()
            .await;

        let client = SubmissionClient::new(format!("{}/", server.url()));
        client.submit(&inquiry()).await.unwrap();
        mock.assert_async().await;
    }
}
