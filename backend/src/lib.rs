//! # Dispute Dashboard Backend
//!
//! Contains all non-UI logic for the transaction coverage dashboard.
//!
//! This crate serves as the orchestration layer that brings together:
//! - **Domain**: aggregation, calendar presentation and reporting rules
//! - **Storage**: the transaction sheet file and the receipt image directory
//! - **IO**: the JSON API that exposes the report views to a frontend
//!
//! The backend is UI-agnostic: the calendar grids, summary table and day
//! detail views are plain data consumed by whichever frontend renders them.

pub mod domain;
pub mod io;
pub mod storage;

use std::path::PathBuf;

use anyhow::Result;
use axum::http::{HeaderValue, Method};
use axum::Router;
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::domain::{
    CalendarService, DetailService, ExportService, ReportService, SelectionService, SummaryService,
};
use crate::storage::{LedgerStore, ReceiptStore};

/// Locations of the report's two inputs.
///
/// The reporting behavior itself is fixed (no flags or environment variables);
/// these paths only vary in tests.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub ledger_path: PathBuf,
    pub receipts_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            ledger_path: PathBuf::from("data/disputed.csv"),
            receipts_dir: PathBuf::from("data/receipts"),
        }
    }
}

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub report_service: ReportService,
    pub calendar_service: CalendarService,
    pub summary_service: SummaryService,
    pub detail_service: DetailService,
    pub selection_service: SelectionService,
    pub export_service: ExportService,
    pub receipt_store: ReceiptStore,
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: ReportConfig) -> Result<AppState> {
    info!("Setting up report services");
    let ledger = LedgerStore::new(config.ledger_path);
    let receipt_store = ReceiptStore::new(config.receipts_dir);

    Ok(AppState {
        report_service: ReportService::new(ledger),
        calendar_service: CalendarService::new(),
        summary_service: SummaryService::new(),
        detail_service: DetailService::new(),
        selection_service: SelectionService::new(),
        export_service: ExportService::new(),
        receipt_store,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow a frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/calendar", io::rest::calendar_apis::router())
        .nest("/summary", io::rest::summary_apis::router())
        .nest("/days", io::rest::day_apis::router())
        .nest("/selection", io::rest::selection_apis::router())
        .nest("/export", io::rest::export_apis::router())
        .nest("/receipts", io::rest::receipt_apis::router());

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
