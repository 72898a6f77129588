//! HTTP access to the upstream employee API

mod client;

pub use client::HttpEmployeeGateway;
