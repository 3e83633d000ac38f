//! Computers & authorized-keys API server library.
//!
//! Exposes the core building blocks (config, state, error handling, codecs,
//! services, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod negotiate;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
