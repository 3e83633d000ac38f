//! SSH key request/response payloads (JSON only).
//!
//! Requests arrive wrapped in an `ssh-key` envelope with the key content
//! under the alias `public`; responses are flat and include the assigned id
//! and the server scope. The envelope is never re-applied on output.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use ksa_core::error::DomainError;
use ksa_core::messages;
use ksa_core::types::DbId;
use ksa_db::models::ssh_key::{CreateSshKey, SshKey, UpdateSshKey};

/// Permitted key types. Anything else fails per-field validation.
static KEY_TYPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^(ssh-rsa|ssh-ed25519)$").expect("key type pattern is valid"));

/// Request envelope: `{"ssh-key": { ... }}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SshKeyRequest {
    #[serde(rename = "ssh-key")]
    pub ssh_key: Option<SshKeyDto>,
}

/// The inner key payload. All fields optional so the same type serves POST
/// (full, validated) and PUT (partial merge) bodies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SshKeyDto {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "public")]
    pub public_key: Option<String>,
    pub comment: Option<String>,
}

/// Flat response shape with the assigned id and server scope.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SshKeyResponse {
    pub id: DbId,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "public")]
    pub public_key: String,
    pub comment: Option<String>,
    pub server_type: String,
    pub server_name: String,
}

impl From<SshKey> for SshKeyResponse {
    fn from(key: SshKey) -> Self {
        Self {
            id: key.id,
            kind: key.key_type,
            public_key: key.public_key,
            comment: key.comment,
            server_type: key.server_type,
            server_name: key.server_name,
        }
    }
}

impl SshKeyRequest {
    /// Per-field checks for POST bodies: the envelope must be present,
    /// `type` must be present and match the permitted pattern, `public`
    /// must be present and non-blank.
    pub fn validate_create(&self) -> Result<&SshKeyDto, DomainError> {
        let key = self.require_envelope()?;

        let mut errors = BTreeMap::new();

        match key.kind.as_deref().map(str::trim) {
            None | Some("") => {
                errors.insert(
                    "type".to_string(),
                    messages::VALIDATION_SSH_KEY_TYPE_REQUIRED.to_string(),
                );
            }
            Some(kind) if !KEY_TYPE_PATTERN.is_match(kind) => {
                errors.insert(
                    "type".to_string(),
                    messages::VALIDATION_SSH_KEY_TYPE_PATTERN.to_string(),
                );
            }
            Some(_) => {}
        }

        if key
            .public_key
            .as_deref()
            .is_none_or(|s| s.trim().is_empty())
        {
            errors.insert(
                "public".to_string(),
                messages::VALIDATION_PUBLIC_KEY_REQUIRED.to_string(),
            );
        }

        if errors.is_empty() {
            Ok(key)
        } else {
            Err(DomainError::Validation(errors))
        }
    }

    /// Per-field checks for PUT bodies: the envelope must be present, and
    /// `type`, when present, must match the permitted pattern. Absent
    /// fields stay untouched by the merge.
    pub fn validate_update(&self) -> Result<&SshKeyDto, DomainError> {
        let key = self.require_envelope()?;

        if let Some(kind) = key.kind.as_deref().map(str::trim) {
            if !KEY_TYPE_PATTERN.is_match(kind) {
                let mut errors = BTreeMap::new();
                errors.insert(
                    "type".to_string(),
                    messages::VALIDATION_SSH_KEY_TYPE_PATTERN.to_string(),
                );
                return Err(DomainError::Validation(errors));
            }
        }

        Ok(key)
    }

    fn require_envelope(&self) -> Result<&SshKeyDto, DomainError> {
        self.ssh_key.as_ref().ok_or_else(|| {
            let mut errors = BTreeMap::new();
            errors.insert(
                "ssh-key".to_string(),
                messages::VALIDATION_SSH_KEY_REQUIRED.to_string(),
            );
            DomainError::Validation(errors)
        })
    }
}

impl SshKeyDto {
    /// Convert a validated POST body into the insert DTO under its server
    /// scope.
    pub fn to_create(&self, server_type: &str, server_name: &str) -> CreateSshKey {
        CreateSshKey {
            server_type: server_type.to_string(),
            server_name: server_name.to_string(),
            key_type: self.kind.clone().unwrap_or_default(),
            public_key: self.public_key.clone().unwrap_or_default(),
            comment: self.comment.clone(),
        }
    }

    /// Convert a PUT body into the partial-update DTO.
    pub fn to_patch(&self) -> UpdateSshKey {
        UpdateSshKey {
            key_type: self.kind.clone(),
            public_key: self.public_key.clone(),
            comment: self.comment.clone(),
        }
    }
}
