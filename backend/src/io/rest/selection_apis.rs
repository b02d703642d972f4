use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use log::{error, info};

use crate::AppState;
use shared::{SelectDayRequest, SelectDayResponse, SelectedDayResponse};

/// Create a router for selection state APIs
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(get_selection).post(select_day).delete(clear_selection),
    )
}

/// Get the currently selected date
async fn get_selection(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/selection");

    let response = SelectedDayResponse {
        selected_date: state.selection_service.current(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// Record a "day selected" event (last write wins)
async fn select_day(
    State(state): State<AppState>,
    Json(request): Json<SelectDayRequest>,
) -> impl IntoResponse {
    info!("POST /api/selection - request: {:?}", request);

    match state.selection_service.select(request.date) {
        Ok(selected_date) => {
            let response = SelectDayResponse {
                selected_date,
                success_message: format!("Selected {}", selected_date.format("%d %b %Y")),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to select date: {}", e);
            (StatusCode::BAD_REQUEST, e).into_response()
        }
    }
}

/// Clear the selection
async fn clear_selection(State(state): State<AppState>) -> impl IntoResponse {
    info!("DELETE /api/selection");

    state.selection_service.clear();
    let response = SelectedDayResponse {
        selected_date: None,
    };
    (StatusCode::OK, Json(response)).into_response()
}
