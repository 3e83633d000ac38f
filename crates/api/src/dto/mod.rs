//! External representations of the two resources and their validation.
//!
//! The computer resource has one internal payload with two encodings (JSON
//! and XML); the SSH key resource is JSON only, with an enveloped request
//! shape and a flat response shape.

pub mod computer;
pub mod ssh_key;
