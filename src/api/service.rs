//! Service controller: owner-scoped list resource, JSON body.

use axum::extract::{Path, State};
use axum::response::Response;
use chrono::Utc;
use mongodb::bson::doc;
use serde::Deserialize;

use crate::api::extract::AppJson;
use crate::api::response;
use crate::auth::AuthOwner;
use crate::error::AppError;
use crate::models::{new_id, Service};
use crate::state::AppState;

const NOT_FOUND: &str = "Service not found";

#[derive(Debug, Deserialize)]
pub struct CreateService {
    pub title: String,
    pub description: String,
    pub icon_name: Option<String>,
    #[serde(default)]
    pub display_order: i32,
    pub is_visible: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateService {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon_name: Option<String>,
    pub display_order: Option<i32>,
    pub is_visible: Option<bool>,
}

/// `POST /api/services`
pub async fn create_service(
    State(state): State<AppState>,
    owner: AuthOwner,
    AppJson(body): AppJson<CreateService>,
) -> Result<Response, AppError> {
    let now = Utc::now();
    let service = Service {
        id: new_id(),
        owner_id: owner.id,
        title: body.title,
        description: body.description,
        icon_name: body.icon_name,
        display_order: body.display_order,
        is_visible: body.is_visible.unwrap_or(true),
        created_at: now,
        updated_at: now,
    };
    state.services.insert(&service).await?;

    Ok(response::created("service", &service))
}

/// `GET /api/services`
pub async fn list_services(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let services = state.services.list(&owner.id, doc! {}).await?;
    Ok(response::list("services", &services))
}

/// `GET /api/services/{id}`
pub async fn get_service(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let service = state
        .services
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(response::ok("service", &service))
}

/// `PUT /api/services/{id}`
pub async fn update_service(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
    AppJson(body): AppJson<UpdateService>,
) -> Result<Response, AppError> {
    let mut service = state
        .services
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if let Some(title) = body.title {
        service.title = title;
    }
    if let Some(description) = body.description {
        service.description = description;
    }
    if let Some(icon_name) = body.icon_name {
        service.icon_name = Some(icon_name);
    }
    if let Some(display_order) = body.display_order {
        service.display_order = display_order;
    }
    if let Some(is_visible) = body.is_visible {
        service.is_visible = is_visible;
    }

    service.updated_at = Utc::now();
    state.services.replace(&id, &owner.id, &service).await?;

    Ok(response::ok("service", &service))
}

/// `DELETE /api/services/{id}`
pub async fn delete_service(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    if !state.services.delete(&id, &owner.id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    Ok(response::message("Service deleted successfully"))
}
