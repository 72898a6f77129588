//! CSV file output for the employee list

mod csv_exporter;

pub use csv_exporter::{default_downloads_dir, CsvFileExporter};
