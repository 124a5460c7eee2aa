pub mod contact;
pub mod health;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use butter_contract::{CreateContact, Endpoint};
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Builds the service router. The contact path comes from the shared
/// endpoint descriptor rather than being restated here.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    let api = Router::new()
        .route("/health", get(health::health_handler))
        .route(CreateContact::PATH, post(contact::create_contact))
        .with_state(state);

    // When a built site bundle is configured, unmatched paths serve it,
    // with an index.html fallback so client-side routing keeps working.
    match static_dir {
        Some(dir) => {
            let index = Path::new(&dir).join("index.html");
            api.fallback_service(ServeDir::new(&dir).fallback(ServeFile::new(index)))
        }
        None => api,
    }
}
