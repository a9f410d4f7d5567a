//! Vitrine storefront library.
//!
//! A server-rendered storefront over a remote catalog API. The catalog is
//! fetched once at startup; search, category filtering and the cart run
//! against in-memory state and are pushed to the browser as HTMX region
//! swaps.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod bootstrap;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod shop;
pub mod state;
pub mod views;

use axum::{Router, middleware::from_fn, middleware::from_fn_with_state};
use tower_http::{
    services::ServeDir,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::middleware::{
    ContentSecurityPolicy, request_id_middleware, security_headers_middleware,
};
use crate::state::AppState;

/// Build the storefront application with its middleware stack.
pub fn app(state: AppState) -> Router {
    let csp = ContentSecurityPolicy::for_catalog(&state.config().catalog.base_url);
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(from_fn_with_state(csp, security_headers_middleware))
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}
