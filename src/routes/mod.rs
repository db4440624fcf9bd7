//! HTTP routes and router assembly

pub mod graphql;
pub mod status;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::graphql::Catalog;
use crate::AppState;

pub use self::graphql::GRAPHQL_PATH;

/// Build the application router for one catalog
pub fn router<C: Catalog>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route("/", get(status::root::<C>))
        .route(
            GRAPHQL_PATH,
            get(graphql::graphql_get::<C>).post(graphql::graphql_post::<C>),
        )
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
