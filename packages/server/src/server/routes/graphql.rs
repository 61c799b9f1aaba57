//! GraphQL over HTTP for the public site and the admin panel.

use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use juniper::http::{graphiql::graphiql_source, GraphQLRequest};
use tracing::debug;

use crate::server::graphql::{GraphQLContext, Schema};

const GRAPHQL_PATH: &str = "/graphql";

/// Execute one query or mutation
///
/// Requests that fail validation or parsing answer 400; resolver errors ride
/// in the `errors` array of a 200 response.
pub async fn graphql_handler(
    State(schema): State<Arc<Schema>>,
    Extension(context): Extension<GraphQLContext>,
    Json(request): Json<GraphQLRequest>,
) -> Response {
    let operation = request.operation_name().map(str::to_string);
    let response = request.execute(&schema, &context).await;

    if response.is_ok() {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        debug!(?operation, admin = context.auth_user.is_some(), "GraphQL request rejected");
        (StatusCode::BAD_REQUEST, Json(response)).into_response()
    }
}

/// GraphiQL explorer pointed at the local endpoint (debug builds only)
pub async fn graphql_playground() -> Html<String> {
    Html(graphiql_source(GRAPHQL_PATH, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_explorer_targets_local_endpoint() {
        let Html(page) = graphql_playground().await;
        assert!(page.contains("var JUNIPER_URL = '/graphql';"));
    }
}
