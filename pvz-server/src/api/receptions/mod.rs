//! Reception API 模块 (收货单生命周期)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/receptions", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::open))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/products", get(handler::list_products))
        .route(
            "/{id}/products/last",
            get(handler::last_product).delete(handler::remove_last_product),
        )
}
