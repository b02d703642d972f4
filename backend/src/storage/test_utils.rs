//! Test fixtures with automatic cleanup.
//!
//! RAII-based: the temporary directory lives as long as the environment, so
//! sheet and receipt files are removed even when a test panics.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tempfile::TempDir;

use crate::{initialize_backend, AppState, ReportConfig};

/// Test environment backed by a temporary data directory
pub struct TestEnvironment {
    pub config: ReportConfig,
    pub base_path: PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create an environment with an empty (header-only) sheet and an empty
    /// receipt directory.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();

        let config = ReportConfig {
            ledger_path: base_path.join("disputed.csv"),
            receipts_dir: base_path.join("receipts"),
        };
        std::fs::create_dir_all(&config.receipts_dir)?;
        std::fs::write(&config.ledger_path, "Date,Amt,File\n")?;

        Ok(Self {
            config,
            base_path,
            _temp_dir: temp_dir,
        })
    }

    /// Overwrite the sheet with the given (date, amount, file) rows
    pub fn write_ledger(&self, rows: &[(&str, &str, &str)]) -> Result<()> {
        let mut file = std::fs::File::create(&self.config.ledger_path)?;
        writeln!(file, "Date,Amt,File")?;
        for (date, amount, file_reference) in rows {
            writeln!(file, "{},{},{}", date, amount, file_reference)?;
        }
        Ok(())
    }

    /// Drop a receipt image file into the receipt directory
    pub fn add_receipt(&self, filename: &str) -> Result<()> {
        std::fs::write(self.config.receipts_dir.join(filename), b"jpeg")?;
        Ok(())
    }

    /// Build the application state over this environment's data directory
    pub fn app_state(&self) -> Result<AppState> {
        initialize_backend(self.config.clone())
    }
}
