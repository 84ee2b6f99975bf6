//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`pickup_points`] - 自提点目录接口
//! - [`receptions`] - 收货单生命周期接口
//! - [`products`] - 收货单内货品接口
//!
//! 所有业务路由挂在 `/api` 前缀下；`/health` 为公共路由。

pub mod health;
pub mod pickup_points;
pub mod products;
pub mod receptions;

use axum::{Router, middleware as axum_middleware};
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

// Re-export common types for handlers
pub use shared::error::{AppError, AppResult};

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// HTTP 请求日志中间件
async fn log_request(
    request: axum::extract::Request,
    next: axum_middleware::Next,
) -> axum::response::Response {
    let start = std::time::Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis();
    tracing::info!(
        target: "http_access",
        "{} {} {} {}ms",
        method,
        uri,
        status,
        latency_ms
    );

    response
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health API - public route
        .merge(health::router())
        // Data model APIs
        .merge(pickup_points::router())
        .merge(receptions::router())
        .merge(products::router())
}

/// Build a fully configured application with all middleware and state
///
/// Used by both the HTTP server and router-level tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing spans
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request, echo it back
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Request logging - outermost, executed first
        .layer(axum_middleware::from_fn(log_request))
}
