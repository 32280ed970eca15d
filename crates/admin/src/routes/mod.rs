//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Redirect to shopping carts
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (REST service health)
//!
//! # Entity lists (full page, or table fragment for htmx)
//! GET  /shopping-cart          - Shopping carts
//! GET  /customer-details       - Customer details
//! GET  /product                - Products
//! GET  /product-category       - Product categories
//! GET  /product-order          - Product orders
//!
//! Query: sort=<field>,<asc|desc>   current order
//!        sort_by=<field>           header click (htmx)
//!        refresh=1                 refresh button (htmx)
//! ```

pub mod entities;
pub mod health;

use axum::{
    Router,
    http::Uri,
    response::Redirect,
    routing::get,
};
use store_admin_core::{CustomerDetails, Product, ProductCategory, ProductOrder, ShoppingCart};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::error::AppError;
use crate::list::ListEntity;
use crate::state::AppState;

/// Directory of the admin's static assets, relative to the workspace root.
pub const STATIC_DIR: &str = "crates/admin/static";

/// Build the route table.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .merge(list_route::<ShoppingCart>())
        .merge(list_route::<CustomerDetails>())
        .merge(list_route::<Product>())
        .merge(list_route::<ProductCategory>())
        .merge(list_route::<ProductOrder>())
        .fallback(not_found)
}

/// Build the application: routes, static assets and request tracing.
pub fn app(state: AppState) -> Router {
    routes()
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
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
}

fn list_route<E: ListEntity>() -> Router<AppState> {
    Router::new().route(&E::ROUTE.list_path(), get(entities::index::<E>))
}

async fn home() -> Redirect {
    Redirect::to(&ShoppingCart::ROUTE.list_path())
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
