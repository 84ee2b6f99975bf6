//! Pickup Point API 模块 (自提点目录)

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/pickup-points", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/receptions", get(handler::list_receptions))
        .route("/{id}/receptions/current", get(handler::current_reception))
        .route("/{id}/receptions/close", post(handler::close_reception))
}
