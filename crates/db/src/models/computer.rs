//! Computer entity model and write DTOs.

use ksa_core::types::DbId;
use serde::Deserialize;
use sqlx::FromRow;

/// A row from the `computers` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Computer {
    pub id: DbId,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub maker: String,
    pub model: String,
    pub language: Option<String>,
    /// Ordered list of color options, possibly empty.
    pub colors: Vec<String>,
}

/// Fields for inserting a new computer. Required fields are already
/// validated by the codec layer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateComputer {
    pub kind: String,
    pub maker: String,
    pub model: String,
    pub language: Option<String>,
    pub colors: Vec<String>,
}

/// Partial update of an existing computer. Only non-`None` fields are
/// applied; `colors`, when present, replaces the stored list in full.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateComputer {
    pub kind: Option<String>,
    pub maker: Option<String>,
    pub model: Option<String>,
    pub language: Option<String>,
    pub colors: Option<Vec<String>>,
}
