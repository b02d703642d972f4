//! Export service domain logic for the coverage dashboard.
//!
//! This module contains all business logic related to exporting the summary
//! table as a CSV file, including orchestration of summary building and file
//! operations. The API layer should only handle transport concerns.

use anyhow::Result;
use log::{error, info};
use std::fs;

use shared::{ExportDataResponse, ExportToPathRequest, ExportToPathResponse};

use crate::domain::aggregation::ReportSnapshot;
use crate::domain::summary::SummaryService;

const EXPORT_FILENAME: &str = "transaction_summary.csv";

/// Export service that handles all export-related business logic
#[derive(Clone)]
pub struct ExportService {
    summary_service: SummaryService,
}

impl ExportService {
    pub fn new() -> Self {
        Self {
            summary_service: SummaryService::new(),
        }
    }

    /// Serialize the summary table as CSV content.
    ///
    /// Columns are `Date,Transactions,Total Amount,Files`, one row per
    /// recorded date ascending, matching the summary view exactly.
    pub fn export_summary_csv(&self, snapshot: &ReportSnapshot) -> Result<ExportDataResponse> {
        let summary = self.summary_service.build(snapshot);

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["Date", "Transactions", "Total Amount", "Files"])?;
        for row in &summary.rows {
            let transactions = row.transactions.to_string();
            writer.write_record([
                row.date.as_str(),
                transactions.as_str(),
                row.total_amount.as_str(),
                row.files.as_str(),
            ])?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush export csv: {}", e))?;
        let csv_content = String::from_utf8(data)?;

        info!(
            "📄 EXPORT: generated {} summary rows ({} bytes) as {}",
            summary.rows.len(),
            csv_content.len(),
            EXPORT_FILENAME
        );

        Ok(ExportDataResponse {
            csv_content,
            filename: EXPORT_FILENAME.to_string(),
            row_count: summary.rows.len(),
        })
    }

    /// Write the export CSV to a directory on disk.
    ///
    /// Uses the caller's path when provided, otherwise falls back to the
    /// Documents folder (then the home directory). Failures are reported in
    /// the response rather than propagated; only building the CSV itself can
    /// fail this call.
    pub fn export_to_path(
        &self,
        request: ExportToPathRequest,
        snapshot: &ReportSnapshot,
    ) -> Result<ExportToPathResponse> {
        info!("📄 EXPORT: exporting to path - custom_path: {:?}", request.custom_path);

        let export = self.export_summary_csv(snapshot)?;

        let export_dir = match request.custom_path {
            Some(custom_path) if !custom_path.trim().is_empty() => {
                std::path::PathBuf::from(self.sanitize_path(&custom_path))
            }
            _ => match dirs::document_dir().or_else(dirs::home_dir) {
                Some(dir) => dir,
                None => {
                    error!("📄 EXPORT: could not determine default export directory");
                    return Ok(ExportToPathResponse {
                        success: false,
                        message: "Failed to determine export directory".to_string(),
                        file_path: String::new(),
                        row_count: 0,
                    });
                }
            },
        };

        let file_path = export_dir.join(&export.filename);

        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!("📄 EXPORT: failed to create export directory {:?}: {}", export_dir, e);
            return Ok(ExportToPathResponse {
                success: false,
                message: format!("Failed to create export directory: {}", e),
                file_path: export_dir.to_string_lossy().to_string(),
                row_count: 0,
            });
        }

        match fs::write(&file_path, &export.csv_content) {
            Ok(_) => {
                let file_path_str = file_path.to_string_lossy().to_string();
                info!(
                    "📄 EXPORT: wrote {} summary rows to {}",
                    export.row_count, file_path_str
                );
                Ok(ExportToPathResponse {
                    success: true,
                    message: format!("File exported successfully to: {}", file_path_str),
                    file_path: file_path_str,
                    row_count: export.row_count,
                })
            }
            Err(e) => {
                error!("📄 EXPORT: failed to write export file to {:?}: {}", file_path, e);
                Ok(ExportToPathResponse {
                    success: false,
                    message: format!("Failed to write export file: {}", e),
                    file_path: file_path.to_string_lossy().to_string(),
                    row_count: 0,
                })
            }
        }
    }

    /// Basic path sanitization to handle common user input issues
    fn sanitize_path(&self, path: &str) -> String {
        let mut cleaned = path.trim().to_string();

        // Remove surrounding quotes (single or double)
        if (cleaned.starts_with('"') && cleaned.ends_with('"'))
            || (cleaned.starts_with('\'') && cleaned.ends_with('\''))
        {
            cleaned = cleaned[1..cleaned.len() - 1].to_string();
        }

        cleaned = cleaned.trim().to_string();

        // Handle escaped spaces (common on some systems)
        cleaned = cleaned.replace("\\ ", " ");

        while cleaned.ends_with('/') || cleaned.ends_with('\\') {
            cleaned.pop();
        }

        // Tilde expansion for the home directory
        if cleaned.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                if cleaned == "~" {
                    cleaned = home.to_string_lossy().to_string();
                } else if cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
                    cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
                }
            }
        }

        cleaned
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
