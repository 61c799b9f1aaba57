//! Postgres-backed stores against a real database.
//!
//! Needs Docker. Run with: cargo test --test postgres_store_tests -- --ignored

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use serde_json::json;
use server_core::domains::auth::AdminUser;
use server_core::domains::inquiries::{Inquiry, InquiryRole, InquiryStatus, NewInquiry};
use server_core::kernel::postgres::{
    PostgresAdminStore, PostgresContentStore, PostgresInquiryStore,
};
use server_core::kernel::{BaseAdminStore, BaseContentStore, BaseInquiryStore};
use sqlx::PgPool;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container, started once and migrated once.
struct SharedDatabase {
    db_url: String,
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_DB: OnceCell<SharedDatabase> = OnceCell::const_new();

impl SharedDatabase {
    async fn init() -> Result<Self> {
        let postgres = Postgres::default()
            .with_tag("16")
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let host = postgres.get_host().await?;
        let port = postgres.get_host_port_ipv4(5432).await?;
        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let pool = PgPool::connect(&db_url)
            .await
            .context("Failed to connect to Postgres for migrations")?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self {
            db_url,
            _postgres: postgres,
        })
    }
}

async fn pool() -> PgPool {
    let shared = SHARED_DB
        .get_or_init(|| async {
            SharedDatabase::init()
                .await
                .expect("Failed to initialize shared database")
        })
        .await;
    PgPool::connect(&shared.db_url)
        .await
        .expect("Failed to connect to test database")
}

fn inquiry(name: &str, created_offset_secs: i64) -> Inquiry {
    Inquiry::from_submission(
        NewInquiry {
            name: name.to_string(),
            email: format!("{}@x.com", name.to_lowercase()),
            phone: "555-1234".to_string(),
            role: InquiryRole::Professor,
            institution_name: None,
            message: Some("Tell me more".to_string()),
        },
        Utc::now() + Duration::seconds(created_offset_secs),
    )
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_content_upsert_overwrites() {
    let store = PostgresContentStore::new(pool().await);

    store
        .put_document("hero", json!({ "tagline": "first" }))
        .await
        .unwrap();
    store
        .put_document("hero", json!({ "tagline": "second" }))
        .await
        .unwrap();

    let stored = store.get_document("hero").await.unwrap().unwrap();
    assert_eq!(stored["tagline"], "second");
    assert!(store.get_document("never-written").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_inquiry_lifecycle() {
    let store = PostgresInquiryStore::new(pool().await);

    // Far-future timestamps keep these rows ahead of rows from other tests
    let older = inquiry("Older", 3_600);
    let newer = inquiry("Newer", 7_200);
    store.insert(older.clone()).await.unwrap();
    store.insert(newer.clone()).await.unwrap();

    let listed = store.list_newest_first().await.unwrap();
    let newer_pos = listed.iter().position(|i| i.id == newer.id).unwrap();
    let older_pos = listed.iter().position(|i| i.id == older.id).unwrap();
    assert!(newer_pos < older_pos);

    let roundtrip = &listed[older_pos];
    assert_eq!(roundtrip.role, InquiryRole::Professor);
    assert_eq!(roundtrip.status, InquiryStatus::New);
    assert_eq!(roundtrip.message.as_deref(), Some("Tell me more"));

    assert!(store.update_status(older.id, InquiryStatus::Replied).await.unwrap());
    assert!(store.update_status(older.id, InquiryStatus::Replied).await.unwrap());

    assert!(store.delete(newer.id).await.unwrap());
    assert!(!store.delete(newer.id).await.unwrap());
    assert!(!store.update_status(newer.id, InquiryStatus::Read).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_admin_lookup_and_login_timestamp() {
    let store = PostgresAdminStore::new(pool().await);
    let email = format!("{}@example.com", uuid::Uuid::new_v4());

    let admin = AdminUser::new(&email, "$argon2id$placeholder".to_string());
    store.insert(admin.clone()).await.unwrap();
    assert!(store.insert(AdminUser::new(&email, "x".to_string())).await.is_err());

    store.record_login(admin.id, Utc::now()).await.unwrap();

    let found = store.find_by_email(&email).await.unwrap().unwrap();
    assert_eq!(found.id, admin.id);
    assert!(found.last_login_at.is_some());
}
