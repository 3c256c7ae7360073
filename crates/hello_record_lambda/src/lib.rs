//! AWS-oriented adapters and handlers for the hello-record function.
//!
//! This crate owns runtime integration details (the Lambda handler and the
//! DynamoDB storage adapter) and re-exports the shared contract primitives
//! under a single runtime module boundary.

pub mod adapters;
pub mod handlers;
pub mod runtime;
