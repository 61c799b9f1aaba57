//! Image upload proxy: authorization, validation, and media host failures.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use server_core::domains::uploads::UploadError;
use server_core::kernel::test_dependencies::MockMediaHost;
use server_core::kernel::CloudinaryClient;
use test_context::test_context;

use crate::common::{multipart_body, post_upload, send, TestHarness, MULTIPART_BOUNDARY};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-image-data";

fn png_upload() -> Vec<u8> {
    multipart_body("file", "campus.png", "image/png", PNG_BYTES)
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_admin_upload_returns_hosted_url(ctx: &TestHarness) {
    let token = ctx.admin_token();

    let (status, body) = send(ctx.router(), post_upload(Some(&token), png_upload())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["publicId"], "exchange-site/campus.png");
    assert_eq!(body["url"], "https://media.test/exchange-site/campus.png");

    let calls = ctx.media_host.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].file_name, "campus.png");
    assert_eq!(calls[0].content_type, "image/png");
    assert_eq!(&calls[0].bytes[..], PNG_BYTES);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_upload_requires_token(ctx: &TestHarness) {
    let (status, body) = send(ctx.router(), post_upload(None, png_upload())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());
    assert!(ctx.media_host.calls().is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_missing_file_field_is_bad_request(ctx: &TestHarness) {
    let token = ctx.admin_token();
    let body = multipart_body("avatar", "campus.png", "image/png", PNG_BYTES);

    let (status, body) = send(ctx.router(), post_upload(Some(&token), body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file provided");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_empty_file_is_bad_request(ctx: &TestHarness) {
    let token = ctx.admin_token();
    let body = multipart_body("file", "empty.png", "image/png", b"");

    let (status, _) = send(ctx.router(), post_upload(Some(&token), body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(ctx.media_host.calls().is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_non_image_is_bad_request(ctx: &TestHarness) {
    let token = ctx.admin_token();
    let body = multipart_body("file", "notes.txt", "text/plain", b"hello");

    let (status, _) = send(ctx.router(), post_upload(Some(&token), body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_file_without_content_type_is_bad_request(ctx: &TestHarness) {
    let token = ctx.admin_token();
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"campus.png\"\r\n\r\nfake-image-data\r\n--{b}--\r\n",
        b = MULTIPART_BOUNDARY
    );

    let (status, body) = send(ctx.router(), post_upload(Some(&token), body.into_bytes())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("content type"));
    assert!(ctx.media_host.calls().is_empty());
}

#[tokio::test]
async fn test_oversized_file_is_rejected() {
    let ctx = TestHarness::with_max_upload_bytes(8);
    let token = ctx.admin_token();

    let (status, body) = send(ctx.router(), post_upload(Some(&token), png_upload())).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(body["error"].as_str().unwrap().contains("8 byte"));
}

#[tokio::test]
async fn test_missing_credentials_fail_closed() {
    let ctx = TestHarness::with_media_host(Arc::new(
        CloudinaryClient::new(None, "exchange-site".to_string()).unwrap(),
    ));
    let token = ctx.admin_token();

    let (status, body) = send(ctx.router(), post_upload(Some(&token), png_upload())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Upload service is not configured");
    assert!(body.get("url").is_none());
}

#[tokio::test]
async fn test_media_host_rejection_is_bad_gateway() {
    let host = MockMediaHost::failing(UploadError::Rejected("Invalid image file".to_string()));
    let ctx = TestHarness::with_media_host(Arc::new(host));
    let token = ctx.admin_token();

    let (status, body) = send(ctx.router(), post_upload(Some(&token), png_upload())).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("Invalid image file"));
}
