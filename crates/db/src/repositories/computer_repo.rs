//! Repository for the `computers` table.

use sqlx::PgExecutor;

use crate::models::computer::{Computer, CreateComputer, UpdateComputer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, type, maker, model, language, colors";

/// Provides CRUD operations for computers.
///
/// Methods are generic over [`PgExecutor`] so callers can run them against
/// the pool directly or inside a transaction.
pub struct ComputerRepo;

impl ComputerRepo {
    /// Whether any computer exists for the given maker.
    pub async fn exists_by_maker(
        executor: impl PgExecutor<'_>,
        maker: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM computers WHERE maker = $1)")
            .bind(maker)
            .fetch_one(executor)
            .await
    }

    /// Whether a computer exists for the given (maker, model) pair.
    pub async fn exists_by_maker_and_model(
        executor: impl PgExecutor<'_>,
        maker: &str,
        model: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM computers WHERE maker = $1 AND model = $2)",
        )
        .bind(maker)
        .bind(model)
        .fetch_one(executor)
        .await
    }

    /// Find a computer by its natural key.
    pub async fn find_by_maker_and_model(
        executor: impl PgExecutor<'_>,
        maker: &str,
        model: &str,
    ) -> Result<Option<Computer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM computers WHERE maker = $1 AND model = $2");
        sqlx::query_as::<_, Computer>(&query)
            .bind(maker)
            .bind(model)
            .fetch_optional(executor)
            .await
    }

    /// List all computers in natural id order.
    pub async fn find_all(executor: impl PgExecutor<'_>) -> Result<Vec<Computer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM computers ORDER BY id");
        sqlx::query_as::<_, Computer>(&query)
            .fetch_all(executor)
            .await
    }

    /// Insert a new computer, returning the stored row with its assigned id.
    pub async fn insert(
        executor: impl PgExecutor<'_>,
        input: &CreateComputer,
    ) -> Result<Computer, sqlx::Error> {
        let query = format!(
            "INSERT INTO computers (type, maker, model, language, colors)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Computer>(&query)
            .bind(&input.kind)
            .bind(&input.maker)
            .bind(&input.model)
            .bind(&input.language)
            .bind(&input.colors)
            .fetch_one(executor)
            .await
    }

    /// Partially update the computer with the given natural key. Only
    /// non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row matches the locator.
    pub async fn update(
        executor: impl PgExecutor<'_>,
        maker: &str,
        model: &str,
        input: &UpdateComputer,
    ) -> Result<Option<Computer>, sqlx::Error> {
        let query = format!(
            "UPDATE computers SET
                type = COALESCE($3, type),
                maker = COALESCE($4, maker),
                model = COALESCE($5, model),
                language = COALESCE($6, language),
                colors = COALESCE($7, colors)
             WHERE maker = $1 AND model = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Computer>(&query)
            .bind(maker)
            .bind(model)
            .bind(&input.kind)
            .bind(&input.maker)
            .bind(&input.model)
            .bind(&input.language)
            .bind(&input.colors)
            .fetch_optional(executor)
            .await
    }

    /// Delete the computer with the given natural key. Returns `true` if a
    /// row was removed.
    pub async fn delete(
        executor: impl PgExecutor<'_>,
        maker: &str,
        model: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM computers WHERE maker = $1 AND model = $2")
            .bind(maker)
            .bind(model)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
