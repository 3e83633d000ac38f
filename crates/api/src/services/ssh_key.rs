//! Business rules for the authorized SSH key store.

use ksa_core::error::DomainError;
use ksa_core::messages;
use ksa_core::types::DbId;
use ksa_db::models::ssh_key::{CreateSshKey, SshKey, UpdateSshKey};
use ksa_db::repositories::SshKeyRepo;
use ksa_db::DbPool;

use crate::error::AppResult;

pub struct SshKeyService;

impl SshKeyService {
    /// Register a new key under its server scope.
    ///
    /// Shape validation runs first, then the duplicate check; a lost race
    /// on the unique index maps to the same failure as the pre-check.
    pub async fn add(pool: &DbPool, input: CreateSshKey) -> AppResult<SshKey> {
        validate_key_shape(&input.key_type, &input.public_key)?;

        let mut tx = pool.begin().await?;

        let exists = SshKeyRepo::exists_by_server_and_public_key(
            &mut *tx,
            &input.server_type,
            &input.server_name,
            &input.public_key,
        )
        .await?;
        if exists {
            return Err(DomainError::KeyAlreadyExists(
                messages::SSH_KEY_ALREADY_EXISTS.to_string(),
            )
            .into());
        }

        let created = match SshKeyRepo::insert(&mut *tx, &input).await {
            Ok(key) => key,
            Err(err) if ksa_db::is_unique_violation(&err) => {
                return Err(DomainError::KeyAlreadyExists(
                    messages::SSH_KEY_ALREADY_EXISTS.to_string(),
                )
                .into());
            }
            Err(err) => return Err(err.into()),
        };

        tx.commit().await?;
        Ok(created)
    }

    /// Fetch a key by id. The id is globally unique; the server scope in
    /// the URL is informational only.
    pub async fn get_by_id(pool: &DbPool, id: DbId) -> AppResult<SshKey> {
        let key = SshKeyRepo::find_by_id(pool, id)
            .await?
            .ok_or_else(|| DomainError::KeyNotFound(messages::SSH_KEY_NOT_FOUND.to_string()))?;
        Ok(key)
    }

    /// List all keys registered for a server.
    pub async fn list(pool: &DbPool, server_type: &str, server_name: &str) -> AppResult<Vec<SshKey>> {
        Ok(SshKeyRepo::find_by_server(pool, server_type, server_name).await?)
    }

    /// Partially update the key with the given id. The shape length check
    /// applies to creation only and is not re-run here.
    pub async fn update(pool: &DbPool, id: DbId, patch: UpdateSshKey) -> AppResult<SshKey> {
        let mut tx = pool.begin().await?;

        let updated = SshKeyRepo::update(&mut *tx, id, &patch)
            .await?
            .ok_or_else(|| DomainError::KeyNotFound(messages::SSH_KEY_NOT_FOUND.to_string()))?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete the key with the given id.
    pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        let deleted = SshKeyRepo::delete_by_id(&mut *tx, id).await?;
        if !deleted {
            return Err(DomainError::KeyNotFound(messages::SSH_KEY_NOT_FOUND.to_string()).into());
        }

        tx.commit().await?;
        Ok(())
    }
}

/// Coarse length check only; the key blob is never parsed.
///
/// `ssh-rsa` keys must be at least 300 characters; `ssh-ed25519` keys must
/// be between 40 and 100 characters inclusive.
fn validate_key_shape(key_type: &str, public_key: &str) -> Result<(), DomainError> {
    match key_type {
        "ssh-rsa" if public_key.chars().count() < 300 => Err(DomainError::InvalidSshKey(
            messages::SSH_KEY_INVALID_RSA.to_string(),
        )),
        "ssh-ed25519" if !(40..=100).contains(&public_key.chars().count()) => Err(
            DomainError::InvalidSshKey(messages::SSH_KEY_INVALID_ED25519.to_string()),
        ),
        _ => Ok(()),
    }
}
