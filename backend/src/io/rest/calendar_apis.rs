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

use crate::domain::report;
use crate::AppState;
use shared::ReportMonthsResponse;

// Query parameters for the calendar month API
#[derive(Debug, Deserialize)]
pub struct CalendarMonthQuery {
    pub month: u32,
    pub year: u32,
}

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/month", get(get_calendar_month))
        .route("/months", get(get_report_months))
}

/// Get one month of the report as a calendar grid
async fn get_calendar_month(
    State(state): State<AppState>,
    Query(query): Query<CalendarMonthQuery>,
) -> impl IntoResponse {
    info!("GET /api/calendar/month - query: {:?}", query);

    if NaiveDate::from_ymd_opt(query.year as i32, query.month, 1).is_none() {
        return (StatusCode::BAD_REQUEST, "Invalid month/year").into_response();
    }

    let snapshot = match state.report_service.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to load report snapshot: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading transaction sheet")
                .into_response();
        }
    };

    let calendar_month =
        state
            .calendar_service
            .generate_calendar_month(query.month, query.year, &snapshot.by_date);
    (StatusCode::OK, Json(calendar_month)).into_response()
}

/// Get every month of the fixed reporting quarter as calendar grids
async fn get_report_months(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/months");

    let snapshot = match state.report_service.snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Failed to load report snapshot: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error loading transaction sheet")
                .into_response();
        }
    };

    let months = report::report_months()
        .into_iter()
        .map(|(month, year)| {
            state
                .calendar_service
                .generate_calendar_month(month, year, &snapshot.by_date)
        })
        .collect();

    (StatusCode::OK, Json(ReportMonthsResponse { months })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_router;
    use crate::storage::test_utils::TestEnvironment;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use shared::{CalendarDayKind, CalendarMonth};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_get_calendar_month() -> Result<(), Box<dyn std::error::Error>> {
        let env = TestEnvironment::new()?;
        env.write_ledger(&[
            ("2025-04-05", "100", "inv-0042"),
            ("2025-04-05", "50", "inv-0043"),
        ])?;
        let app = create_router(env.app_state()?);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendar/month?month=4&year=2025")
                    .method(Method::GET)
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let month: CalendarMonth = serde_json::from_slice(&body)?;

        assert_eq!(month.month, 4);
        assert_eq!(month.year, 2025);
        assert_eq!(month.month_name, "April");
        assert_eq!(month.days.len() % 7, 0);

        let active = month
            .days
            .iter()
            .find(|cell| cell.kind == CalendarDayKind::Active)
            .unwrap();
        assert_eq!(active.day, 5);
        assert_eq!(active.count, 2);
        assert_eq!(active.total_amount, 150.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_calendar_month_invalid_month() -> Result<(), Box<dyn std::error::Error>> {
        let env = TestEnvironment::new()?;
        let app = create_router(env.app_state()?);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendar/month?month=13&year=2025")
                    .method(Method::GET)
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_report_months() -> Result<(), Box<dyn std::error::Error>> {
        let env = TestEnvironment::new()?;
        let app = create_router(env.app_state()?);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendar/months")
                    .method(Method::GET)
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let months: ReportMonthsResponse = serde_json::from_slice(&body)?;

        assert_eq!(months.months.len(), 3);
        assert_eq!(months.months[0].month_name, "April");
        assert_eq!(months.months[1].month_name, "May");
        assert_eq!(months.months[2].month_name, "June");

        Ok(())
    }

    #[tokio::test]
    async fn test_unreadable_sheet_is_server_error() -> Result<(), Box<dyn std::error::Error>> {
        let env = TestEnvironment::new()?;
        std::fs::remove_file(&env.config.ledger_path)?;
        let app = create_router(env.app_state()?);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/calendar/month?month=4&year=2025")
                    .method(Method::GET)
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }
}
