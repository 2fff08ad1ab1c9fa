//! Router assembly: the whole HTTP surface in one place.

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{about, contact, education, experience, profile, project, service, settings, skill};
use crate::state::AppState;

/// Multipart bodies top out at 8 MiB; individual file ceilings are lower
/// and enforced per asset class.
const BODY_LIMIT: usize = 8 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/profile",
            post(profile::create_profile)
                .get(profile::get_profile)
                .put(profile::update_profile)
                .delete(profile::delete_profile),
        )
        .route(
            "/api/profile/image",
            post(profile::upload_profile_image).delete(profile::delete_profile_image),
        )
        .route(
            "/api/profile/cv",
            post(profile::upload_cv)
                .get(profile::download_cv)
                .delete(profile::delete_cv),
        )
        .route(
            "/api/about",
            post(about::create_about)
                .get(about::get_about)
                .put(about::update_about)
                .delete(about::delete_about),
        )
        .route(
            "/api/settings",
            post(settings::create_settings)
                .get(settings::get_settings)
                .put(settings::update_settings)
                .delete(settings::delete_settings),
        )
        .route(
            "/api/settings/logo",
            post(settings::upload_logo).delete(settings::delete_logo),
        )
        .route(
            "/api/settings/favicon",
            post(settings::upload_favicon).delete(settings::delete_favicon),
        )
        .route(
            "/api/education",
            post(education::create_education).get(education::list_education),
        )
        .route(
            "/api/education/{id}",
            get(education::get_education)
                .put(education::update_education)
                .delete(education::delete_education),
        )
        .route(
            "/api/experience",
            post(experience::create_experience).get(experience::list_experience),
        )
        .route(
            "/api/experience/{id}",
            get(experience::get_experience)
                .put(experience::update_experience)
                .delete(experience::delete_experience),
        )
        .route(
            "/api/projects",
            post(project::create_project).get(project::list_projects),
        )
        .route(
            "/api/projects/{id}",
            get(project::get_project)
                .put(project::update_project)
                .delete(project::delete_project),
        )
        .route(
            "/api/projects/{id}/image",
            delete(project::delete_project_image),
        )
        .route(
            "/api/services",
            post(service::create_service).get(service::list_services),
        )
        .route(
            "/api/services/{id}",
            get(service::get_service)
                .put(service::update_service)
                .delete(service::delete_service),
        )
        .route(
            "/api/skills",
            post(skill::create_skill).get(skill::list_skills),
        )
        .route(
            "/api/skills/{id}",
            get(skill::get_skill)
                .put(skill::update_skill)
                .delete(skill::delete_skill),
        )
        .route("/api/skills/{id}/icon", delete(skill::delete_skill_icon))
        .route(
            "/api/contact",
            post(contact::create_contact).get(contact::list_contacts),
        )
        .route("/api/contact/stats", get(contact::contact_stats))
        .route(
            "/api/contact/{id}",
            get(contact::get_contact).delete(contact::delete_contact),
        )
        .route(
            "/api/contact/{id}/status",
            patch(contact::update_contact_status),
        )
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "success", "message": "OK" }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "status": "error", "message": "Route not found" })),
    )
}
