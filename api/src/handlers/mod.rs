pub mod error;

pub use error::{handle_domain_error, not_found, query_error_handler};
