use axum::{response::IntoResponse, Json};

use crate::graphql::Catalog;
use crate::routes::graphql::GRAPHQL_PATH;

/// Root endpoint - basic status
pub async fn root<C: Catalog>() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": format!("{} GraphQL API", C::ENTITY),
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "graphql": GRAPHQL_PATH,
    }))
}
