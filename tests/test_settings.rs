mod common;

use axum_test::multipart::{MultipartForm, Part};
use serde_json::{json, Value};

fn png_part() -> Part {
    Part::bytes(common::png_bytes())
        .file_name("logo.png")
        .mime_type("image/png")
}

#[tokio::test]
async fn defaults_applied_on_create() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let response = server
        .post("/api/settings")
        .authorization_bearer(common::token())
        .json(&json!({}))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    let settings = &body["data"]["settings"];
    assert_eq!(settings["site_title"], "My Portfolio");
    assert_eq!(settings["theme_settings"]["primary_color"], "#3B82F6");
    assert_eq!(settings["maintenance_mode"], false);
}

#[tokio::test]
async fn singleton_and_partial_update() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    server
        .post("/api/settings")
        .authorization_bearer(common::token())
        .json(&json!({
            "site_title": "Ada's Portfolio",
            "seo_settings": { "meta_keywords": ["rust", "engineer"] }
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    server
        .post("/api/settings")
        .authorization_bearer(common::token())
        .json(&json!({}))
        .await
        .assert_status_bad_request();

    let response = server
        .put("/api/settings")
        .authorization_bearer(common::token())
        .json(&json!({ "maintenance_mode": true }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["settings"]["maintenance_mode"], true);
    assert_eq!(body["data"]["settings"]["site_title"], "Ada's Portfolio");
    assert_eq!(
        body["data"]["settings"]["seo_settings"]["meta_keywords"][0],
        "rust"
    );
}

#[tokio::test]
async fn unknown_theme_keys_survive_round_trips() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    server
        .post("/api/settings")
        .authorization_bearer(common::token())
        .json(&json!({
            "theme_settings": { "dark_mode": true, "accent_color": "#FF00FF" }
        }))
        .await;

    let response = server
        .get("/api/settings")
        .authorization_bearer(common::token())
        .await;
    let body: Value = response.json();
    assert_eq!(body["data"]["settings"]["theme_settings"]["accent_color"], "#FF00FF");
    assert_eq!(body["data"]["settings"]["theme_settings"]["dark_mode"], true);
}

#[tokio::test]
async fn logo_and_favicon_slots() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    server
        .post("/api/settings")
        .authorization_bearer(common::token())
        .json(&json!({}))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/api/settings/logo")
        .authorization_bearer(common::token())
        .multipart(MultipartForm::new().add_part("logo", png_part()))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    let logo_url = body["data"]["settings"]["site_logo_url"]
        .as_str()
        .expect("logo URL")
        .to_string();
    assert!(env.blob_exists(&logo_url).await);

    let favicon = Part::bytes(common::png_bytes())
        .file_name("favicon.png")
        .mime_type("image/png");
    server
        .post("/api/settings/favicon")
        .authorization_bearer(common::token())
        .multipart(MultipartForm::new().add_part("favicon", favicon))
        .await
        .assert_status_ok();

    server
        .delete("/api/settings/logo")
        .authorization_bearer(common::token())
        .await
        .assert_status_ok();
    assert!(!env.blob_exists(&logo_url).await);

    server
        .delete("/api/settings/logo")
        .authorization_bearer(common::token())
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn delete_retires_both_image_slots() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    server
        .post("/api/settings")
        .authorization_bearer(common::token())
        .json(&json!({}))
        .await;
    let response = server
        .post("/api/settings/logo")
        .authorization_bearer(common::token())
        .multipart(MultipartForm::new().add_part("logo", png_part()))
        .await;
    let body: Value = response.json();
    let logo_url = body["data"]["settings"]["site_logo_url"]
        .as_str()
        .expect("logo URL")
        .to_string();

    server
        .delete("/api/settings")
        .authorization_bearer(common::token())
        .await
        .assert_status_ok();
    assert!(!env.blob_exists(&logo_url).await);
}
