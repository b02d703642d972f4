use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::{error, info};

use crate::AppState;

/// Create a router for the coverage summary API
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_summary))
}

/// Get the coverage summary for the full reporting range
async fn get_summary(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/summary");

    let snapshot = match state.report_service.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to load report snapshot: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading transaction sheet")
                .into_response();
        }
    };

    let summary = state.summary_service.build(&snapshot);
    (StatusCode::OK, Json(summary)).into_response()
}
