//! Project controller: owner-scoped list resource with an image slot and
//! list filters (category, status, is_featured).

use axum::extract::{Multipart, Path, Query, State};
use axum::response::Response;
use chrono::Utc;
use mongodb::bson::{doc, Document};
use serde::Deserialize;

use crate::api::forms::{read_form, FormMap};
use crate::api::response;
use crate::assets::{self, PROJECT_IMAGE};
use crate::auth::AuthOwner;
use crate::error::AppError;
use crate::models::{new_id, Project, ProjectStatus};
use crate::state::AppState;
use crate::storage::discard;

const NOT_FOUND: &str = "Project not found";

#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilter {
    pub category: Option<String>,
    pub status: Option<ProjectStatus>,
    pub is_featured: Option<bool>,
}

impl ProjectFilter {
    fn into_document(self) -> Result<Document, AppError> {
        let mut filter = doc! {};
        if let Some(category) = self.category {
            filter.insert("category", category);
        }
        if let Some(status) = self.status {
            let value = mongodb::bson::ser::to_bson(&status)
                .map_err(|e| AppError::Internal(e.to_string()))?;
            filter.insert("status", value);
        }
        if let Some(is_featured) = self.is_featured {
            filter.insert("is_featured", is_featured);
        }
        Ok(filter)
    }
}

fn take_status(form: &mut FormMap) -> Result<Option<ProjectStatus>, AppError> {
    match form.take("status") {
        Some(raw) => serde_json::from_value(serde_json::Value::String(raw))
            .map(Some)
            .map_err(|_| AppError::Validation("Invalid project status".into())),
        None => Ok(None),
    }
}

/// `POST /api/projects` — multipart; optional image under `image_url`.
pub async fn create_project(
    State(state): State<AppState>,
    owner: AuthOwner,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (mut form, file) = read_form(multipart, "image_url").await?;

    let title = form.require("title")?;
    let description = form.require("description")?;
    let category = form.require("category")?;
    let tags = form.take_json("tags")?.unwrap_or_default();
    let github_url = form.take("github_url");
    let live_url = form.take("live_url");
    let status = take_status(&mut form)?.unwrap_or_default();
    let display_order = form.take_parsed("display_order")?.unwrap_or(0);
    let is_featured = form.take_parsed("is_featured")?.unwrap_or(false);
    let is_visible = form.take_parsed("is_visible")?.unwrap_or(true);

    let mut image_url = None;
    if let Some(file) = &file {
        image_url = Some(assets::push(state.blobs.as_ref(), &PROJECT_IMAGE, &owner.id, file).await?);
    }

    let now = Utc::now();
    let project = Project {
        id: new_id(),
        owner_id: owner.id,
        title,
        description,
        category,
        tags,
        image_url,
        github_url,
        live_url,
        status,
        display_order,
        is_featured,
        is_visible,
        created_at: now,
        updated_at: now,
    };
    state.projects.insert(&project).await?;

    Ok(response::created("project", &project))
}

/// `GET /api/projects`
pub async fn list_projects(
    State(state): State<AppState>,
    owner: AuthOwner,
    Query(filter): Query<ProjectFilter>,
) -> Result<Response, AppError> {
    let filter = filter.into_document()?;
    let projects = state.projects.list(&owner.id, filter).await?;
    Ok(response::list("projects", &projects))
}

/// `GET /api/projects/{id}`
pub async fn get_project(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let project = state
        .projects
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(response::ok("project", &project))
}

/// `PUT /api/projects/{id}` — multipart partial merge; a new image replaces
/// and retires the old one.
pub async fn update_project(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (mut form, file) = read_form(multipart, "image_url").await?;

    let mut project = state
        .projects
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if let Some(title) = form.take("title") {
        project.title = title;
    }
    if let Some(description) = form.take("description") {
        project.description = description;
    }
    if let Some(category) = form.take("category") {
        project.category = category;
    }
    if let Some(tags) = form.take_json("tags")? {
        project.tags = tags;
    }
    if let Some(github_url) = form.take("github_url") {
        project.github_url = Some(github_url);
    }
    if let Some(live_url) = form.take("live_url") {
        project.live_url = Some(live_url);
    }
    if let Some(status) = take_status(&mut form)? {
        project.status = status;
    }
    if let Some(display_order) = form.take_parsed("display_order")? {
        project.display_order = display_order;
    }
    if let Some(is_featured) = form.take_parsed("is_featured")? {
        project.is_featured = is_featured;
    }
    if let Some(is_visible) = form.take_parsed("is_visible")? {
        project.is_visible = is_visible;
    }

    if let Some(file) = &file {
        project.image_url = Some(
            assets::swap(
                state.blobs.as_ref(),
                &PROJECT_IMAGE,
                &owner.id,
                file,
                project.image_url.as_deref(),
            )
            .await?,
        );
    }

    project.updated_at = Utc::now();
    state.projects.replace(&id, &owner.id, &project).await?;

    Ok(response::ok("project", &project))
}

/// `DELETE /api/projects/{id}` — retires the image blob.
pub async fn delete_project(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let project = state
        .projects
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    discard(state.blobs.as_ref(), project.image_url.as_deref()).await;
    state.projects.delete(&id, &owner.id).await?;

    Ok(response::message("Project deleted successfully"))
}

/// `DELETE /api/projects/{id}/image`
pub async fn delete_project_image(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let mut project = state
        .projects
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if project.image_url.is_none() {
        return Err(AppError::NotFound("No project image found".into()));
    }

    discard(state.blobs.as_ref(), project.image_url.as_deref()).await;
    project.image_url = None;
    project.updated_at = Utc::now();
    state.projects.replace(&id, &owner.id, &project).await?;

    Ok(response::ok_with_message(
        "Project image deleted successfully",
        "project",
        &project,
    ))
}
