//! Configuration for the employee service

use ems_shared::config::{NotFoundDetection, UpstreamConfig};

/// Configuration for the employee service
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeServiceConfig {
    /// How upstream "not found" answers are recognised
    pub not_found_detection: NotFoundDetection,
}

impl From<&UpstreamConfig> for EmployeeServiceConfig {
    fn from(upstream: &UpstreamConfig) -> Self {
        Self {
            not_found_detection: upstream.not_found_detection,
        }
    }
}
