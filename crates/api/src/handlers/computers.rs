//! Handlers for the `/computers` resource.
//!
//! All handlers speak both JSON and XML: the response encoding follows the
//! `Accept` header, request bodies follow `Content-Type`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use ksa_db::models::computer::Computer;

use crate::dto::computer::ComputerDto;
use crate::error::AppResult;
use crate::negotiate::{ComputerBody, ResponseFormat};
use crate::services::ComputerService;
use crate::state::AppState;

/// GET /computers
pub async fn list(State(state): State<AppState>, format: ResponseFormat) -> AppResult<Response> {
    let computers = ComputerService::list(&state.pool).await?;
    format.render_computer_list(computers.into_iter().map(ComputerDto::from).collect())
}

/// GET /computers/{maker}
///
/// The model segment is absent; the service decides between "model
/// required" (known maker) and "maker not found".
pub async fn get_by_maker(
    State(state): State<AppState>,
    Path(maker): Path<String>,
    format: ResponseFormat,
) -> AppResult<Response> {
    let computer = ComputerService::get(&state.pool, &maker, None).await?;
    render_one(format, StatusCode::OK, computer)
}

/// GET /computers/{maker}/{model} and GET /computers/{maker}/{model}/
pub async fn get_by_maker_and_model(
    State(state): State<AppState>,
    Path((maker, model)): Path<(String, String)>,
    format: ResponseFormat,
) -> AppResult<Response> {
    let computer = ComputerService::get(&state.pool, &maker, Some(&model)).await?;
    render_one(format, StatusCode::OK, computer)
}

/// POST /computers
pub async fn create(
    State(state): State<AppState>,
    format: ResponseFormat,
    ComputerBody(dto): ComputerBody,
) -> AppResult<Response> {
    dto.validate_create()?;
    let created = ComputerService::create(&state.pool, dto.into_create()).await?;
    render_one(format, StatusCode::CREATED, created)
}

/// PUT /computers/{maker}/{model}
pub async fn update(
    State(state): State<AppState>,
    Path((maker, model)): Path<(String, String)>,
    format: ResponseFormat,
    ComputerBody(dto): ComputerBody,
) -> AppResult<Response> {
    let updated = ComputerService::update(&state.pool, &maker, &model, dto.into_patch()).await?;
    render_one(format, StatusCode::OK, updated)
}

/// DELETE /computers/{maker}/{model}
pub async fn delete(
    State(state): State<AppState>,
    Path((maker, model)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    ComputerService::delete(&state.pool, &maker, &model).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn render_one(format: ResponseFormat, status: StatusCode, computer: Computer) -> AppResult<Response> {
    format.render_computer(status, ComputerDto::from(computer))
}
