//! HTTP surface: router assembly and middleware

pub mod extract;
pub mod handlers;

use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use uuid::Uuid;

use crate::state::AppState;

/// Issues a fresh UUID v4 as the `x-request-id` of every request
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build the axum router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Resource routes
        .nest("/api/courses", handlers::courses::routes())
        .nest("/api/instructors", handlers::instructors::routes())
        .nest("/api/students", handlers::students::routes())
        // Health check
        .route("/health", get(handlers::health::health_check))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                }))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(CorsLayer::permissive())
                .into_inner(),
        )
        .with_state(state)
}
