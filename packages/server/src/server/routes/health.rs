use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::kernel::ServerDeps;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    database: DatabaseHealth,
    #[serde(skip_serializing_if = "Option::is_none")]
    connection_pool: Option<ConnectionPoolHealth>,
    media_host: String,
}

#[derive(Serialize)]
pub struct DatabaseHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
pub struct ConnectionPoolHealth {
    size: u32,
    idle_connections: usize,
    max_connections: u32,
}

/// Health check endpoint
///
/// Checks:
/// - Database connectivity and responsiveness (skipped for in-memory stores)
/// - Connection pool utilization
/// - Whether upload credentials are configured (informational only)
///
/// Returns 200 OK if the database answers, 503 Service Unavailable otherwise.
pub async fn health_handler(
    Extension(deps): Extension<Arc<ServerDeps>>,
) -> (StatusCode, Json<HealthResponse>) {
    let (db_health, pool_health) = match &deps.db_pool {
        Some(pool) => {
            let db_health = match tokio::time::timeout(
                std::time::Duration::from_secs(5),
                sqlx::query("SELECT 1").execute(pool),
            )
            .await
            {
                Ok(Ok(_)) => DatabaseHealth {
                    status: "ok".to_string(),
                    error: None,
                },
                Ok(Err(e)) => DatabaseHealth {
                    status: "error".to_string(),
                    error: Some(format!("Query failed: {}", e)),
                },
                Err(_) => DatabaseHealth {
                    status: "error".to_string(),
                    error: Some("Query timeout (>5s)".to_string()),
                },
            };

            let pool_health = ConnectionPoolHealth {
                size: pool.size(),
                idle_connections: pool.num_idle(),
                max_connections: pool.options().get_max_connections(),
            };

            (db_health, Some(pool_health))
        }
        None => (
            DatabaseHealth {
                status: "in_memory".to_string(),
                error: None,
            },
            None,
        ),
    };

    let media_host = if deps.media_host.is_configured() {
        "configured"
    } else {
        "not_configured"
    };

    let is_healthy = db_health.status != "error";

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(HealthResponse {
            status: if is_healthy { "healthy" } else { "unhealthy" }.to_string(),
            database: db_health,
            connection_pool: pool_health,
            media_host: media_host.to_string(),
        }),
    )
}
