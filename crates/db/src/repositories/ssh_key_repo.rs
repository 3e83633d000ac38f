//! Repository for the `ssh_keys` table.

use sqlx::PgExecutor;

use ksa_core::types::DbId;

use crate::models::ssh_key::{CreateSshKey, SshKey, UpdateSshKey};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, server_type, server_name, key_type, public_key, comment";

/// Provides CRUD operations for authorized SSH keys.
///
/// Methods are generic over [`PgExecutor`] so callers can run them against
/// the pool directly or inside a transaction.
pub struct SshKeyRepo;

impl SshKeyRepo {
    /// Whether the public key is already registered for the given server.
    pub async fn exists_by_server_and_public_key(
        executor: impl PgExecutor<'_>,
        server_type: &str,
        server_name: &str,
        public_key: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM ssh_keys
              WHERE server_type = $1 AND server_name = $2 AND public_key = $3)",
        )
        .bind(server_type)
        .bind(server_name)
        .bind(public_key)
        .fetch_one(executor)
        .await
    }

    /// List all keys registered for a server, in id order.
    pub async fn find_by_server(
        executor: impl PgExecutor<'_>,
        server_type: &str,
        server_name: &str,
    ) -> Result<Vec<SshKey>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ssh_keys
             WHERE server_type = $1 AND server_name = $2
             ORDER BY id"
        );
        sqlx::query_as::<_, SshKey>(&query)
            .bind(server_type)
            .bind(server_name)
            .fetch_all(executor)
            .await
    }

    /// Find a key by its id. The id is globally unique, so no server scope
    /// is needed here.
    pub async fn find_by_id(
        executor: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<SshKey>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM ssh_keys WHERE id = $1");
        sqlx::query_as::<_, SshKey>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Insert a new key, returning the stored row with its assigned id.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        input: &CreateSshKey,
    ) -> Result<SshKey, sqlx::Error> {
        let query = format!(
            "INSERT INTO ssh_keys (server_type, server_name, key_type, public_key, comment)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SshKey>(&query)
            .bind(&input.server_type)
            .bind(&input.server_name)
            .bind(&input.key_type)
            .bind(&input.public_key)
            .bind(&input.comment)
            .fetch_one(executor)
            .await
    }

    /// Partially update the key with the given id. Only non-`None` fields
    /// in `input` are applied.
    ///
    /// Returns `None` if no row with the given id exists.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        id: DbId,
        input: &UpdateSshKey,
    ) -> Result<Option<SshKey>, sqlx::Error> {
        let query = format!(
            "UPDATE ssh_keys SET
                key_type = COALESCE($2, key_type),
                public_key = COALESCE($3, public_key),
                comment = COALESCE($4, comment)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SshKey>(&query)
            .bind(id)
            .bind(&input.key_type)
            .bind(&input.public_key)
            .bind(&input.comment)
            .fetch_optional(executor)
            .await
    }

    /// Delete the key with the given id. Returns `true` if a row was removed.
    pub async fn delete_by_id(executor: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM ssh_keys WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
