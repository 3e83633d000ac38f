pub mod computers;
pub mod health;
pub mod ssh_keys;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree. Mounted at the root, not under a version
/// prefix; the public paths are part of the contract.
///
/// ```text
/// /computers                                       list, create
/// /computers/{maker}                               get (model absent)
/// /computers/{maker}/{model}                       get, update, delete
/// /computers/{maker}/{model}/                      get (trailing slash)
///
/// /{serverType}/{serverName}/authorized_keys       list, create
/// /{serverType}/{serverName}/authorized_keys/{id}  get, update, delete
/// ```
///
/// The static `/computers` prefix always wins over the `{serverType}`
/// capture, so the two trees cannot shadow each other.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(computers::router())
        .merge(ssh_keys::router())
}
