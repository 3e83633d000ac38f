//! Shared domain types for the computers & authorized-keys service.
//!
//! Holds the pieces every other crate agrees on: primitive type aliases,
//! the closed set of domain failures, and the centralized error-message
//! constants.

pub mod error;
pub mod messages;
pub mod types;
