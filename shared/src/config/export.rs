//! CSV export configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Destination of the employee CSV export
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Target directory; `<home>/Downloads` when unset
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// File name inside the target directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            file_name: default_file_name(),
        }
    }
}

impl ExportConfig {
    /// Export into an explicit directory instead of the user's Downloads folder
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: Some(directory.into()),
            ..Default::default()
        }
    }
}

fn default_file_name() -> String {
    String::from("exported_data.csv")
}
