//! PostgreSQL persistence layer: pool helpers, embedded migrations, row
//! models and repositories for the two resource tables.

pub mod models;
pub mod repositories;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from pre-built connect options.
pub async fn create_pool(options: PgConnectOptions) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
}

/// Cheap liveness probe: one round-trip on a pooled connection.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Apply the embedded migrations in `migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Whether `err` is a PostgreSQL unique-constraint violation (SQLSTATE 23505).
///
/// Services use this to fold an index-level duplicate (lost race between two
/// concurrent creators) into the same failure as their pre-check.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505")
    )
}
