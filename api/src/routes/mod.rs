//! Route handlers

pub mod ems;
