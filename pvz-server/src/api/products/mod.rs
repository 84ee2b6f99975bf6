//! Product API 模块 (收货登记货品)

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create))
        .route("/batch", post(handler::create_batch))
        .route("/{id}", get(handler::get_by_id))
}
