use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use log::info;

use crate::AppState;
use shared::RefreshReceiptsResponse;

/// Create a router for receipt cache APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/refresh", post(refresh_receipts))
}

/// Invalidate the receipt filename cache and re-list the directory
async fn refresh_receipts(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/receipts/refresh");

    state.receipt_store.invalidate();
    let available_files = state.receipt_store.available_count();

    let response = RefreshReceiptsResponse {
        success_message: format!("Receipt listing refreshed: {} files", available_files),
        available_files,
    };
    (StatusCode::OK, Json(response)).into_response()
}
