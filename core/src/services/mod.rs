//! Business services containing domain logic and use cases.

pub mod employee;

// Re-export commonly used types
pub use employee::{
    EmployeeExporter, EmployeeGateway, EmployeeService, EmployeeServiceConfig, ExportReceipt,
    UpstreamResponse,
};
