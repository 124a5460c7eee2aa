use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use butter_contract::{Acknowledgement, ContactSubmission};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/contact
///
/// The body is read raw and run through the same shared-schema parse the
/// submitting client uses; client-side checks are never trusted. Taking
/// `Bytes` instead of a typed extractor keeps malformed-JSON rejections in
/// the contract's `{ message }` shape.
pub async fn create_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Acknowledgement>), AppError> {
    let raw: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| AppError::Validation(format!("invalid JSON body: {e}")))?;
    let submission =
        ContactSubmission::parse(raw).map_err(|e| AppError::Validation(e.to_string()))?;

    let ack = Acknowledgement {
        id: Uuid::new_v4().to_string(),
        created_at: Utc::now(),
    };
    state.sink.deliver(&submission, &ack).await?;

    info!(id = %ack.id, company = %submission.company, "contact submission accepted");
    Ok((StatusCode::CREATED, Json(ack)))
}
