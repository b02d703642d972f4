use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use chrono::NaiveDate;
use log::{error, info};
use serde::Deserialize;

use crate::AppState;

// Query parameters for the day detail API
#[derive(Debug, Deserialize)]
pub struct DayDetailQuery {
    pub date: NaiveDate,
}

/// Create a router for day drill-down APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/detail", get(get_day_detail))
        .route("/selected", get(get_selected_day_detail))
}

/// Get the detail view for an explicit date
async fn get_day_detail(
    State(state): State<AppState>,
    Query(query): Query<DayDetailQuery>,
) -> impl IntoResponse {
    info!("GET /api/days/detail - query: {:?}", query);

    let snapshot = match state.report_service.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to load report snapshot: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading transaction sheet")
                .into_response();
        }
    };

    let detail = state
        .detail_service
        .day_detail(&snapshot, query.date, &state.receipt_store);
    (StatusCode::OK, Json(detail)).into_response()
}

/// Get the detail view for the currently selected date
async fn get_selected_day_detail(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/days/selected");

    let date = match state.selection_service.current() {
        Some(date) => date,
        None => {
            return (StatusCode::NOT_FOUND, "No date is currently selected").into_response();
        }
    };

    let snapshot = match state.report_service.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to load report snapshot: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading transaction sheet")
                .into_response();
        }
    };

    let detail = state
        .detail_service
        .day_detail(&snapshot, date, &state.receipt_store);
    (StatusCode::OK, Json(detail)).into_response()
}
