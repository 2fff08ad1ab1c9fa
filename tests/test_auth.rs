mod common;

use serde_json::Value;

#[tokio::test]
async fn missing_token_rejected() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server.get("/api/profile").await;
    response.assert_status_unauthorized();

    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Not authorized");
}

#[tokio::test]
async fn malformed_scheme_rejected() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server
        .get("/api/profile")
        .add_header("authorization", format!("Basic {}", common::token()))
        .await;
    response.assert_status_unauthorized();
}

#[tokio::test]
async fn garbage_token_rejected_with_uniform_message() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server
        .get("/api/education")
        .authorization_bearer("not.a.token")
        .await;
    response.assert_status_unauthorized();

    let body: Value = response.json();
    assert_eq!(body["message"], "Not authorized");
}

#[tokio::test]
async fn token_for_unknown_subject_rejected() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    // Validly signed, but the subject has no owner record.
    let response = server
        .get("/api/education")
        .authorization_bearer(common::token_for("ghost"))
        .await;
    response.assert_status_unauthorized();

    let body: Value = response.json();
    assert_eq!(body["message"], "Not authorized");
}

#[tokio::test]
async fn valid_token_passes_the_gate() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let response = server
        .get("/api/education")
        .authorization_bearer(common::token())
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["results"], 0);
}

#[tokio::test]
async fn contact_form_needs_no_token() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let response = server
        .post("/api/contact")
        .json(&serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "Nice site"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
}

#[tokio::test]
async fn health_is_public() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn unknown_route_uses_error_envelope() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server.get("/api/nope").await;
    response.assert_status_not_found();

    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Route not found");
}
