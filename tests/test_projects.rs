mod common;

use axum_test::multipart::{MultipartForm, Part};
use serde_json::Value;

fn project_form(title: &str, category: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("title", title)
        .add_text("description", "A project")
        .add_text("category", category)
}

fn png_part() -> Part {
    Part::bytes(common::png_bytes())
        .file_name("shot.png")
        .mime_type("image/png")
}

#[tokio::test]
async fn create_with_defaults() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let response = server
        .post("/api/projects")
        .authorization_bearer(common::token())
        .multipart(
            project_form("Compiler", "systems")
                .add_text("tags", r#"["rust", "llvm"]"#)
                .add_text("github_url", "https://github.com/ada/compiler"),
        )
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let body: Value = response.json();
    let project = &body["data"]["project"];
    assert_eq!(project["status"], "In Progress");
    assert_eq!(project["is_featured"], false);
    assert_eq!(project["is_visible"], true);
    assert_eq!(project["tags"][1], "llvm");
}

#[tokio::test]
async fn list_filters() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    for (title, category, status, featured) in [
        ("One", "web", "Completed", "true"),
        ("Two", "web", "In Progress", "false"),
        ("Three", "systems", "Completed", "false"),
    ] {
        server
            .post("/api/projects")
            .authorization_bearer(common::token())
            .multipart(
                project_form(title, category)
                    .add_text("status", status)
                    .add_text("is_featured", featured),
            )
            .await;
    }

    let response = server
        .get("/api/projects?category=web")
        .authorization_bearer(common::token())
        .await;
    let body: Value = response.json();
    assert_eq!(body["results"], 2);

    let response = server
        .get("/api/projects?status=Completed")
        .authorization_bearer(common::token())
        .await;
    let body: Value = response.json();
    assert_eq!(body["results"], 2);

    let response = server
        .get("/api/projects?category=web&status=Completed&is_featured=true")
        .authorization_bearer(common::token())
        .await;
    let body: Value = response.json();
    assert_eq!(body["results"], 1);
    assert_eq!(body["data"]["projects"][0]["title"], "One");
}

#[tokio::test]
async fn title_only_update_preserves_the_rest() {
    let env = common::TestEnv::start().await;
    let server = env.server();

    let response = server
        .post("/api/projects")
        .authorization_bearer(common::token())
        .multipart(
            project_form("Original", "web")
                .add_text("tags", r#"["rust"]"#)
                .add_text("status", "Completed")
                .add_part("image_url", png_part()),
        )
        .await;
    let body: Value = response.json();
    let id = body["data"]["project"]["_id"]
        .as_str()
        .expect("id")
        .to_string();
    let image_url = body["data"]["project"]["image_url"]
        .as_str()
        .expect("image URL")
        .to_string();

    let response = server
        .put(&format!("/api/projects/{id}"))
        .authorization_bearer(common::token())
        .multipart(MultipartForm::new().add_text("title", "Renamed"))
        .await;
    let body: Value = response.json();
    let project = &body["data"]["project"];
    assert_eq!(project["title"], "Renamed");
    assert_eq!(project["tags"][0], "rust");
    assert_eq!(project["status"], "Completed");
    assert_eq!(project["image_url"], image_url.as_str());
    assert!(env.blob_exists(&image_url).await);
}

#[tokio::test]
async fn invalid_status_in_form_rejected() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server
        .post("/api/projects")
        .authorization_bearer(common::token())
        .multipart(project_form("Bad", "web").add_text("status", "Cancelled"))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn image_swap_and_delete() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server
        .post("/api/projects")
        .authorization_bearer(common::token())
        .multipart(project_form("Shots", "web").add_part("image_url", png_part()))
        .await;
    let body: Value = response.json();
    let id = body["data"]["project"]["_id"]
        .as_str()
        .expect("id")
        .to_string();
    let first_url = body["data"]["project"]["image_url"]
        .as_str()
        .expect("image URL")
        .to_string();
    assert!(env.blob_exists(&first_url).await);

    let response = server
        .put(&format!("/api/projects/{id}"))
        .authorization_bearer(common::token())
        .multipart(MultipartForm::new().add_part("image_url", png_part()))
        .await;
    let body: Value = response.json();
    let second_url = body["data"]["project"]["image_url"]
        .as_str()
        .expect("image URL")
        .to_string();
    assert_ne!(first_url, second_url);
    assert!(!env.blob_exists(&first_url).await);

    server
        .delete(&format!("/api/projects/{id}/image"))
        .authorization_bearer(common::token())
        .await
        .assert_status_ok();
    assert!(!env.blob_exists(&second_url).await);

    server
        .delete(&format!("/api/projects/{id}/image"))
        .authorization_bearer(common::token())
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn delete_retires_image() {
    let env = common::TestEnv::start().await;
    let server = env.server_permissive();

    let response = server
        .post("/api/projects")
        .authorization_bearer(common::token())
        .multipart(project_form("Temp", "web").add_part("image_url", png_part()))
        .await;
    let body: Value = response.json();
    let id = body["data"]["project"]["_id"]
        .as_str()
        .expect("id")
        .to_string();
    let url = body["data"]["project"]["image_url"]
        .as_str()
        .expect("image URL")
        .to_string();

    server
        .delete(&format!("/api/projects/{id}"))
        .authorization_bearer(common::token())
        .await
        .assert_status_ok();
    assert!(!env.blob_exists(&url).await);

    server
        .delete(&format!("/api/projects/{id}"))
        .authorization_bearer(common::token())
        .await
        .assert_status_not_found();
}
