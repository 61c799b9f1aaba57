//! In-memory test harness for integration testing.
//!
//! Every store is an in-memory double from `kernel::test_dependencies`, so the
//! full router and schema run without Docker. Tests against real Postgres live
//! in `postgres_store_tests.rs`.

use axum::extract::connect_info::MockConnectInfo;
use axum::extract::ConnectInfo;
use axum::Extension;
use axum::Router;
use server_core::common::AdminUserId;
use server_core::domains::auth::actions::create_admin;
use server_core::domains::auth::{AdminUser, JwtService};
use server_core::kernel::test_dependencies::{
    InMemoryAdminStore, InMemoryContentStore, InMemoryInquiryStore, MockMediaHost,
};
use server_core::kernel::{BaseContentStore, BaseMediaHost, ServerDeps, DEFAULT_MAX_UPLOAD_BYTES};
use server_core::server::build_app;
use server_core::server::middleware::AuthUser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;

use super::GraphQLClient;

pub const ADMIN_EMAIL: &str = "ops@example.com";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";

/// Test harness wiring the real router and schema to in-memory stores.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let client = ctx.graphql();
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    pub content_store: InMemoryContentStore,
    pub inquiry_store: InMemoryInquiryStore,
    pub admin_store: InMemoryAdminStore,
    pub media_host: MockMediaHost,
    pub jwt_service: Arc<JwtService>,
    pub deps: Arc<ServerDeps>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self::new()
    }
}

impl TestHarness {
    pub fn new() -> Self {
        let media_host = MockMediaHost::new();
        Self::build(media_host.clone(), Arc::new(media_host), |deps| deps)
    }

    /// Harness whose uploads go to `media_host` instead of the recording mock
    pub fn with_media_host(media_host: Arc<dyn BaseMediaHost>) -> Self {
        Self::build(MockMediaHost::new(), media_host, |deps| deps)
    }

    /// Harness with a different upload size limit
    pub fn with_max_upload_bytes(limit: usize) -> Self {
        let media_host = MockMediaHost::new();
        Self::build(media_host.clone(), Arc::new(media_host), |deps| {
            deps.with_max_upload_bytes(limit)
        })
    }

    /// Harness whose content reads go to `store`
    pub fn with_content_store(store: Arc<dyn BaseContentStore>) -> Self {
        let media_host = MockMediaHost::new();
        Self::build(media_host.clone(), Arc::new(media_host), |mut deps| {
            deps.content_store = store;
            deps
        })
    }

    fn build(
        media_host: MockMediaHost,
        host: Arc<dyn BaseMediaHost>,
        customize: impl FnOnce(ServerDeps) -> ServerDeps,
    ) -> Self {
        let content_store = InMemoryContentStore::new();
        let inquiry_store = InMemoryInquiryStore::new();
        let admin_store = InMemoryAdminStore::new();
        let jwt_service = Arc::new(JwtService::new("test_secret", "test_issuer".to_string()));

        let deps = ServerDeps {
            db_pool: None,
            content_store: Arc::new(content_store.clone()),
            inquiry_store: Arc::new(inquiry_store.clone()),
            admin_store: Arc::new(admin_store.clone()),
            media_host: host,
            jwt_service: jwt_service.clone(),
            content_fetch_timeout: Duration::from_millis(500),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        };

        Self {
            content_store,
            inquiry_store,
            admin_store,
            media_host,
            jwt_service,
            deps: Arc::new(customize(deps)),
        }
    }

    /// Anonymous GraphQL client (public visitor).
    pub fn graphql(&self) -> GraphQLClient {
        GraphQLClient::new(self.deps.clone(), None)
    }

    /// GraphQL client acting as a signed-in admin.
    pub fn graphql_as_admin(&self) -> GraphQLClient {
        GraphQLClient::new(
            self.deps.clone(),
            Some(AuthUser {
                admin_id: AdminUserId::new(),
                email: ADMIN_EMAIL.to_string(),
                is_admin: true,
            }),
        )
    }

    /// Register the standard test admin.
    pub async fn create_admin(&self) -> AdminUser {
        create_admin(ADMIN_EMAIL, ADMIN_PASSWORD, &self.admin_store)
            .await
            .expect("Failed to create admin")
    }

    /// Bearer token for a freshly minted admin identity.
    pub fn admin_token(&self) -> String {
        self.jwt_service
            .create_token(AdminUserId::new(), ADMIN_EMAIL.to_string(), true)
            .expect("Failed to create token")
            .token
    }

    /// The full HTTP app, as served in production.
    pub fn router(&self) -> Router {
        let peer = SocketAddr::from(([127, 0, 0, 1], 4000));
        build_app(self.deps.clone(), &[])
            .layer(MockConnectInfo(peer))
            // The rate limiter reads `ConnectInfo` straight from extensions,
            // as `into_make_service_with_connect_info` provides in production
            .layer(Extension(ConnectInfo(peer)))
    }
}
