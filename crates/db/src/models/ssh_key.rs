//! SSH key entity model and write DTOs.

use ksa_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `ssh_keys` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct SshKey {
    pub id: DbId,
    pub server_type: String,
    pub server_name: String,
    pub key_type: String,
    /// Opaque base64 blob; never parsed cryptographically.
    pub public_key: String,
    pub comment: Option<String>,
}

/// Fields for inserting a new SSH key under a server scope.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSshKey {
    pub server_type: String,
    pub server_name: String,
    pub key_type: String,
    pub public_key: String,
    pub comment: Option<String>,
}

/// Partial update of an existing SSH key. The server scope is fixed at
/// creation and never updated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSshKey {
    pub key_type: Option<String>,
    pub public_key: Option<String>,
    pub comment: Option<String>,
}
