//! GraphQL endpoint
//!
//! `POST /graphql` executes a JSON request body. `GET /graphql` executes a
//! query passed in the query string, or serves GraphiQL when no query is
//! given. Mutations are only accepted over POST.

use async_graphql::http::GraphiQLSource;
use async_graphql::parser::{parse_query, types::OperationType};
use async_graphql::Variables;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::graphql::Catalog;
use crate::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Query string accepted by GET /graphql
///
/// `variables` is a JSON object encoded as a string.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLParams {
    pub query: Option<String>,
    pub operation_name: Option<String>,
    pub variables: Option<String>,
}

impl GraphQLParams {
    /// Build the request, `Ok(None)` when no query was given
    fn into_request(self) -> Result<Option<async_graphql::Request>, &'static str> {
        let Some(query) = self.query else {
            return Ok(None);
        };

        let mut request = async_graphql::Request::new(query);
        if let Some(name) = self.operation_name.filter(|n| !n.is_empty()) {
            request = request.operation_name(name);
        }
        if let Some(raw) = self.variables.filter(|v| !v.trim().is_empty()) {
            let value: serde_json::Value =
                serde_json::from_str(&raw).map_err(|_| "Variables are invalid JSON.")?;
            request = request.variables(Variables::from_json(value));
        }

        Ok(Some(request))
    }
}

/// POST /graphql - Execute a GraphQL request
pub async fn graphql_post<C: Catalog>(
    State(state): State<Arc<AppState<C>>>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(state.schema.execute(request).await)
}

/// GET /graphql - Execute a query from the query string or serve GraphiQL
pub async fn graphql_get<C: Catalog>(
    State(state): State<Arc<AppState<C>>>,
    params: Result<Query<GraphQLParams>, QueryRejection>,
) -> Response {
    let params = match params {
        Ok(Query(params)) => params,
        Err(e) => {
            tracing::debug!("Rejected GET request: {}", e);
            return error_response(StatusCode::BAD_REQUEST, &e.body_text());
        }
    };

    let request = match params.into_request() {
        Ok(Some(request)) => request,
        Ok(None) if state.config.graphiql => return Html(graphiql_page()).into_response(),
        Ok(None) => {
            return error_response(StatusCode::BAD_REQUEST, "Must provide query string.");
        }
        Err(message) => return error_response(StatusCode::BAD_REQUEST, message),
    };

    if is_mutation(&request) {
        return error_response(
            StatusCode::METHOD_NOT_ALLOWED,
            "Can only perform a mutation operation from a POST request.",
        );
    }

    Json(state.schema.execute(request).await).into_response()
}

fn graphiql_page() -> String {
    GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()
}

/// Whether the operation selected by `request` is a mutation
///
/// Unparseable documents return false and are reported by execution.
fn is_mutation(request: &async_graphql::Request) -> bool {
    let Ok(document) = parse_query(&request.query) else {
        return false;
    };

    document.operations.iter().any(|(name, operation)| {
        let selected = match (request.operation_name.as_deref(), name) {
            (Some(wanted), Some(name)) => wanted == name.as_str(),
            (Some(_), None) => false,
            (None, _) => true,
        };
        selected && operation.node.ty == OperationType::Mutation
    })
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({ "errors": [{ "message": message }] })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_use_camel_case_operation_name() {
        let params = GraphQLParams {
            query: Some("query L { books { id } }".to_string()),
            operation_name: Some("L".to_string()),
            variables: Some(r#"{"id": "abc"}"#.to_string()),
        };

        let request = params.into_request().unwrap().unwrap();
        assert_eq!(request.operation_name.as_deref(), Some("L"));
        assert_eq!(
            request.variables.into_value().into_json().unwrap(),
            serde_json::json!({ "id": "abc" })
        );
    }

    #[test]
    fn test_params_without_query() {
        assert!(GraphQLParams::default().into_request().unwrap().is_none());
    }

    #[test]
    fn test_params_invalid_variables() {
        let params = GraphQLParams {
            query: Some("{ books { id } }".to_string()),
            variables: Some("{not json".to_string()),
            ..Default::default()
        };
        assert_eq!(params.into_request().unwrap_err(), "Variables are invalid JSON.");
    }

    #[test]
    fn test_is_mutation() {
        let request = async_graphql::Request::new("mutation { deleteBook(id: \"x\") }");
        assert!(is_mutation(&request));

        let request = async_graphql::Request::new("{ books { id } }");
        assert!(!is_mutation(&request));

        let request = async_graphql::Request::new("not graphql {");
        assert!(!is_mutation(&request));
    }

    #[test]
    fn test_is_mutation_respects_operation_name() {
        let document = "query List { books { id } } mutation Drop { deleteBook(id: \"x\") }";

        let request = async_graphql::Request::new(document).operation_name("List");
        assert!(!is_mutation(&request));

        let request = async_graphql::Request::new(document).operation_name("Drop");
        assert!(is_mutation(&request));
    }
}
