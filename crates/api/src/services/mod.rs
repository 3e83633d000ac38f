//! Domain services: business rules on top of the repositories.
//!
//! Each write runs inside one transaction that commits only on a success
//! outcome; a dropped transaction (error path or cancelled request) rolls
//! back, so no partial mutation is ever observable.

pub mod computer;
pub mod ssh_key;

pub use computer::ComputerService;
pub use ssh_key::SshKeyService;
