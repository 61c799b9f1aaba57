//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post, put},
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::kernel::ServerDeps;
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{
    extract_client_ip, jwt_auth_middleware, AuthUser, RATE_LIMIT_BURST, RATE_LIMIT_PER_SECOND,
};
use crate::server::routes::{
    get_all_content, get_content_section, graphql_handler, health_handler,
    put_content_section, upload_handler,
};

/// Room for multipart boundaries and headers on top of the file itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(deps): Extension<Arc<ServerDeps>>,
    mut request: Request,
    next: Next,
) -> Response {
    // Populated by jwt_auth_middleware when a valid token was sent
    let auth_user = request.extensions().get::<AuthUser>().cloned();

    let context = GraphQLContext::new(deps, auth_user);
    request.extensions_mut().insert(context);

    next.run(request).await
}

/// CORS for the public site and admin panel
///
/// An empty origin list allows any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(deps: Arc<ServerDeps>, allowed_origins: &[String]) -> Router {
    // Create GraphQL schema (singleton)
    let schema = Arc::new(create_schema());

    let jwt_service_for_middleware = deps.jwt_service.clone();
    let upload_body_limit = deps.max_upload_bytes + MULTIPART_OVERHEAD_BYTES;

    // Rate limiting: 10/sec per IP with burst of 20
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(RATE_LIMIT_PER_SECOND)
            .burst_size(RATE_LIMIT_BURST)
            .key_extractor(SmartIpKeyExtractor) // X-Forwarded-For / X-Real-IP, then peer address
            .use_headers() // x-ratelimit-* response headers
            .finish()
            .expect("Rate limiter configuration is valid and should never fail"),
    );

    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    let mut api = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/api/content", get(get_all_content))
        .route("/api/content/:section", get(get_content_section))
        .route("/api/admin/content/:section", put(put_content_section))
        .route(
            "/api/admin/upload",
            post(upload_handler).layer(DefaultBodyLimit::max(upload_body_limit)),
        );

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        api = api.route(
            "/graphql",
            get(crate::server::routes::graphql_playground),
        );
    }

    Router::new()
        .merge(api.layer(rate_limit_layer))
        // Health check (no rate limit)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service_for_middleware.clone(), req, next)
        }))
        .layer(middleware::from_fn(extract_client_ip))
        .layer(Extension(deps))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(schema)
}
