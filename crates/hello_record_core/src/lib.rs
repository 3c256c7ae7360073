//! Shared primitives for the hello-record function.
//!
//! This crate owns the fixed record, the response envelope contract, and
//! handler configuration. It intentionally excludes AWS SDK and Lambda
//! runtime concerns.

pub mod config;
pub mod contract;
