//! Route definitions for the computers catalog.
//!
//! The three GET shapes (`/{maker}`, `/{maker}/{model}`,
//! `/{maker}/{model}/`) all dispatch to one lookup with a possibly-absent
//! model; axum 0.8 treats the trailing slash as a distinct route, so it is
//! registered explicitly.

use axum::routing::get;
use axum::Router;

use crate::handlers::computers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/computers", get(computers::list).post(computers::create))
        .route("/computers/{maker}", get(computers::get_by_maker))
        .route(
            "/computers/{maker}/{model}",
            get(computers::get_by_maker_and_model)
                .put(computers::update)
                .delete(computers::delete),
        )
        .route(
            "/computers/{maker}/{model}/",
            get(computers::get_by_maker_and_model),
        )
}
