use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use log::{error, info};

use crate::AppState;
use shared::ExportToPathRequest;

/// Create a router for summary export APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/csv", get(get_export_csv))
        .route("/path", post(export_to_path))
}

/// Get the summary table serialized as CSV
async fn get_export_csv(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/export/csv");

    let snapshot = match state.report_service.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to load report snapshot: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading transaction sheet")
                .into_response();
        }
    };

    match state.export_service.export_summary_csv(&snapshot) {
        Ok(export) => (StatusCode::OK, Json(export)).into_response(),
        Err(e) => {
            error!("Failed to build export CSV: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error building export").into_response()
        }
    }
}

/// Write the summary CSV to a directory on disk
async fn export_to_path(
    State(state): State<AppState>,
    Json(request): Json<ExportToPathRequest>,
) -> impl IntoResponse {
    info!("POST /api/export/path - request: {:?}", request);

    let snapshot = match state.report_service.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to load report snapshot: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading transaction sheet")
                .into_response();
        }
    };

    match state.export_service.export_to_path(request, &snapshot) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to export to path: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error writing export").into_response()
        }
    }
}
