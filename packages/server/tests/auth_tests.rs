//! Admin login and bearer-token access.

mod common;

use axum::http::StatusCode;
use server_core::common::AdminUserId;
use server_core::domains::auth::JwtService;
use server_core::kernel::BaseAdminStore;
use test_context::test_context;

use crate::common::{post_graphql, put_json, send, TestHarness, ADMIN_EMAIL, ADMIN_PASSWORD};

fn login_mutation(email: &str, password: &str) -> String {
    format!(
        r#"mutation {{ login(email: "{}", password: "{}") {{ token expiresAt admin {{ id email }} }} }}"#,
        email, password
    )
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_login_issues_token_for_valid_credentials(ctx: &TestHarness) {
    let admin = ctx.create_admin().await;

    let result = ctx
        .graphql()
        .execute(&login_mutation(ADMIN_EMAIL, ADMIN_PASSWORD))
        .await;

    assert!(result.is_ok(), "{:?}", result.errors);
    let token = result.get("login.token");
    let claims = ctx.jwt_service.verify_token(token.as_str().unwrap()).unwrap();
    assert_eq!(claims.admin_id, admin.id.into_uuid());
    assert_eq!(result.get("login.admin.email"), ADMIN_EMAIL);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_login_records_last_login(ctx: &TestHarness) {
    ctx.create_admin().await;
    ctx.graphql()
        .query(&login_mutation(ADMIN_EMAIL, ADMIN_PASSWORD))
        .await;

    let stored = ctx
        .admin_store
        .find_by_email(ADMIN_EMAIL)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.last_login_at.is_some());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_wrong_password_and_unknown_email_look_the_same(ctx: &TestHarness) {
    ctx.create_admin().await;
    let client = ctx.graphql();

    let wrong_password = client
        .execute(&login_mutation(ADMIN_EMAIL, "not-the-password"))
        .await;
    let unknown_email = client
        .execute(&login_mutation("stranger@example.com", ADMIN_PASSWORD))
        .await;

    assert_eq!(wrong_password.errors, vec!["Invalid credentials".to_string()]);
    assert_eq!(unknown_email.errors, wrong_password.errors);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_me_requires_token(ctx: &TestHarness) {
    let result = ctx.graphql().execute("{ me { email } }").await;
    assert!(!result.is_ok());

    let result = ctx.graphql_as_admin().execute("{ me { email } }").await;
    assert_eq!(result.get("me.email"), ADMIN_EMAIL);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_token_from_login_unlocks_admin_routes(ctx: &TestHarness) {
    ctx.create_admin().await;

    let (status, body) = send(
        ctx.router(),
        post_graphql(&login_mutation(ADMIN_EMAIL, ADMIN_PASSWORD), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["data"]["login"]["token"].as_str().unwrap().to_string();

    let (status, body) = send(ctx.router(), post_graphql("{ me { email } }", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["me"]["email"], ADMIN_EMAIL);

    let (status, _) = send(
        ctx.router(),
        put_json(
            "/api/admin/content/contact",
            Some(&token),
            &serde_json::to_value(
                server_core::domains::content::models::ContactContent::default(),
            )
            .unwrap(),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_token_signed_with_other_secret_is_ignored(ctx: &TestHarness) {
    let forged = JwtService::new("someone-elses-secret", "test_issuer".to_string())
        .create_token(AdminUserId::new(), ADMIN_EMAIL.to_string(), true)
        .unwrap()
        .token;

    let (_, body) = send(ctx.router(), post_graphql("{ me { email } }", Some(&forged))).await;
    assert!(body["data"]["me"].is_null());
    assert_eq!(body["errors"][0]["message"], "Authentication required");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_token_with_wrong_issuer_is_ignored(ctx: &TestHarness) {
    let other_issuer = JwtService::new("test_secret", "someone-else".to_string())
        .create_token(AdminUserId::new(), ADMIN_EMAIL.to_string(), true)
        .unwrap()
        .token;

    let (_, body) = send(
        ctx.router(),
        post_graphql("{ me { email } }", Some(&other_issuer)),
    )
    .await;
    assert!(body["data"]["me"].is_null());
}
