//! Domain entities representing core business objects.

pub mod employee;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use employee::{Employee, CSV_HEADERS};
