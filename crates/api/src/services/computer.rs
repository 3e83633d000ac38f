//! Business rules for the computers catalog.

use ksa_core::error::DomainError;
use ksa_core::messages;
use ksa_db::models::computer::{Computer, CreateComputer, UpdateComputer};
use ksa_db::repositories::ComputerRepo;
use ksa_db::DbPool;

use crate::error::AppResult;

pub struct ComputerService;

impl ComputerService {
    /// Look up a computer by maker and (optional) model.
    ///
    /// A missing, blank or literal-`"/"` model is a distinct failure,
    /// depending on whether the maker is known at all: 403-style "model
    /// required" for a known maker, "maker not found" otherwise.
    pub async fn get(pool: &DbPool, maker: &str, model: Option<&str>) -> AppResult<Computer> {
        let model = model
            .map(str::trim)
            .filter(|m| !m.is_empty() && *m != "/");

        let Some(model) = model else {
            if ComputerRepo::exists_by_maker(pool, maker).await? {
                return Err(DomainError::ModelRequired(
                    messages::MODEL_PARAMETER_REQUIRED.to_string(),
                )
                .into());
            }
            return Err(DomainError::MakerNotFound(messages::maker_not_found(maker)).into());
        };

        if !ComputerRepo::exists_by_maker(pool, maker).await? {
            return Err(DomainError::MakerNotFound(messages::maker_not_found(maker)).into());
        }

        let computer = ComputerRepo::find_by_maker_and_model(pool, maker, model)
            .await?
            .ok_or_else(|| {
                DomainError::ComputerNotFound(messages::computer_not_found_for(maker, model))
            })?;

        Ok(computer)
    }

    /// List the full catalog in natural id order.
    pub async fn list(pool: &DbPool) -> AppResult<Vec<Computer>> {
        Ok(ComputerRepo::find_all(pool).await?)
    }

    /// Create a new computer. The natural key must be unused; a lost race
    /// on the unique index maps to the same failure as the pre-check.
    pub async fn create(pool: &DbPool, input: CreateComputer) -> AppResult<Computer> {
        let mut tx = pool.begin().await?;

        if ComputerRepo::exists_by_maker_and_model(&mut *tx, &input.maker, &input.model).await? {
            return Err(DomainError::AlreadyExists(
                messages::COMPUTER_ALREADY_EXISTS.to_string(),
            )
            .into());
        }

        let created = match ComputerRepo::insert(&mut *tx, &input).await {
            Ok(computer) => computer,
            Err(err) if ksa_db::is_unique_violation(&err) => {
                return Err(DomainError::AlreadyExists(
                    messages::COMPUTER_ALREADY_EXISTS.to_string(),
                )
                .into());
            }
            Err(err) => return Err(err.into()),
        };

        tx.commit().await?;
        Ok(created)
    }

    /// Partially update the computer with the given natural key.
    pub async fn update(
        pool: &DbPool,
        maker: &str,
        model: &str,
        patch: UpdateComputer,
    ) -> AppResult<Computer> {
        let mut tx = pool.begin().await?;

        let updated = ComputerRepo::update(&mut *tx, maker, model, &patch)
            .await?
            .ok_or_else(|| {
                DomainError::ComputerNotFound(messages::COMPUTER_NOT_FOUND.to_string())
            })?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Delete the computer with the given natural key.
    pub async fn delete(pool: &DbPool, maker: &str, model: &str) -> AppResult<()> {
        let mut tx = pool.begin().await?;

        let deleted = ComputerRepo::delete(&mut *tx, maker, model).await?;
        if !deleted {
            return Err(
                DomainError::ComputerNotFound(messages::COMPUTER_NOT_FOUND.to_string()).into(),
            );
        }

        tx.commit().await?;
        Ok(())
    }
}
