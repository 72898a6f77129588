//! Employee list export to a comma-delimited file
//!
//! The file is truncated and rewritten on every export. Concurrent exports
//! to the same path are not coordinated: the last writer wins.

use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use ems_core::domain::entities::{Employee, CSV_HEADERS};
use ems_core::errors::{DomainError, DomainResult};
use ems_core::services::employee::{EmployeeExporter, ExportReceipt};
use ems_shared::config::ExportConfig;

use crate::InfrastructureError;

/// `<home>/Downloads` for the current user
pub fn default_downloads_dir() -> Result<PathBuf, InfrastructureError> {
    dirs::home_dir()
        .map(|home| home.join("Downloads"))
        .ok_or(InfrastructureError::NoHomeDirectory)
}

/// Writes the employee list to `<directory>/<file_name>`
///
/// Without an explicit directory the user's Downloads folder is looked up
/// on every export.
#[derive(Debug, Clone)]
pub struct CsvFileExporter {
    directory: Option<PathBuf>,
    file_name: String,
}

impl CsvFileExporter {
    pub fn new(directory: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            directory: Some(directory.into()),
            file_name: file_name.into(),
        }
    }

    /// Exporter writing `file_name` into the user's Downloads folder
    pub fn in_downloads(file_name: impl Into<String>) -> Self {
        Self {
            directory: None,
            file_name: file_name.into(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        match &config.directory {
            Some(directory) => Self::new(directory.clone(), config.file_name.clone()),
            None => Self::in_downloads(config.file_name.clone()),
        }
    }

    /// Full path of the export file
    pub fn path(&self) -> Result<PathBuf, InfrastructureError> {
        let directory = match &self.directory {
            Some(directory) => directory.clone(),
            None => default_downloads_dir()?,
        };
        Ok(directory.join(&self.file_name))
    }

    fn write(&self, employees: &[Employee]) -> Result<PathBuf, InfrastructureError> {
        let path = self.path()?;
        if let Some(directory) = path.parent().filter(|dir| !dir.exists()) {
            debug!(directory = %directory.display(), "Creating export directory");
            fs::create_dir_all(directory)?;
        }

        write_csv(&path, employees)?;
        Ok(path)
    }
}

fn write_csv(path: &Path, employees: &[Employee]) -> Result<(), InfrastructureError> {
    let mut writer = csv::WriterBuilder::new().delimiter(b',').from_path(path)?;

    writer.write_record(CSV_HEADERS)?;
    for employee in employees {
        writer.write_record(employee.csv_record())?;
    }
    writer.flush()?;

    Ok(())
}

#[async_trait]
impl EmployeeExporter for CsvFileExporter {
    async fn export(&self, employees: &[Employee]) -> DomainResult<ExportReceipt> {
        let exporter = self.clone();
        let employees = employees.to_vec();
        let rows = employees.len();

        let path = tokio::task::spawn_blocking(move || exporter.write(&employees))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Export task failed: {}", e),
            })?
            .map_err(|e| {
                error!(file = %self.file_name, error = %e, "Failed to write export file");
                DomainError::from(e)
            })?;

        Ok(ExportReceipt { path, rows })
    }
}
