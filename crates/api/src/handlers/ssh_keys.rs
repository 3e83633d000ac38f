//! Handlers for the `/{serverType}/{serverName}/authorized_keys` resource.
//!
//! JSON only. The server scope identifies the key store on POST and list;
//! on id-addressed operations the id alone suffices and the scope in the
//! URL is informational.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use ksa_core::types::DbId;

use crate::dto::ssh_key::{SshKeyRequest, SshKeyResponse};
use crate::error::AppResult;
use crate::negotiate::JsonBody;
use crate::services::SshKeyService;
use crate::state::AppState;

/// POST /{serverType}/{serverName}/authorized_keys
pub async fn create(
    State(state): State<AppState>,
    Path((server_type, server_name)): Path<(String, String)>,
    JsonBody(request): JsonBody<SshKeyRequest>,
) -> AppResult<(StatusCode, Json<SshKeyResponse>)> {
    let key = request.validate_create()?;
    let created =
        SshKeyService::add(&state.pool, key.to_create(&server_type, &server_name)).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /{serverType}/{serverName}/authorized_keys
pub async fn list(
    State(state): State<AppState>,
    Path((server_type, server_name)): Path<(String, String)>,
) -> AppResult<Json<Vec<SshKeyResponse>>> {
    let keys = SshKeyService::list(&state.pool, &server_type, &server_name).await?;
    Ok(Json(keys.into_iter().map(SshKeyResponse::from).collect()))
}

/// GET /{serverType}/{serverName}/authorized_keys/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((_server_type, _server_name, id)): Path<(String, String, DbId)>,
) -> AppResult<Json<SshKeyResponse>> {
    let key = SshKeyService::get_by_id(&state.pool, id).await?;
    Ok(Json(key.into()))
}

/// PUT /{serverType}/{serverName}/authorized_keys/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((_server_type, _server_name, id)): Path<(String, String, DbId)>,
    JsonBody(request): JsonBody<SshKeyRequest>,
) -> AppResult<Json<SshKeyResponse>> {
    let key = request.validate_update()?;
    let updated = SshKeyService::update(&state.pool, id, key.to_patch()).await?;
    Ok(Json(updated.into()))
}

/// DELETE /{serverType}/{serverName}/authorized_keys/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path((_server_type, _server_name, id)): Path<(String, String, DbId)>,
) -> AppResult<StatusCode> {
    SshKeyService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
