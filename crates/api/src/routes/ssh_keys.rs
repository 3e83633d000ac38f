//! Route definitions for the per-server authorized keys store.

use axum::routing::get;
use axum::Router;

use crate::handlers::ssh_keys;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{server_type}/{server_name}/authorized_keys",
            get(ssh_keys::list).post(ssh_keys::create),
        )
        .route(
            "/{server_type}/{server_name}/authorized_keys/{id}",
            get(ssh_keys::get_by_id)
                .put(ssh_keys::update)
                .delete(ssh_keys::delete),
        )
}
