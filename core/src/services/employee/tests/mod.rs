//! Tests for the employee service

mod service_tests;
