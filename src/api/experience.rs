//! Experience controller: owner-scoped list resource, JSON body.

use axum::extract::{Path, State};
use axum::response::Response;
use chrono::{DateTime, Utc};
use mongodb::bson::doc;
use serde::Deserialize;

use crate::api::extract::AppJson;
use crate::api::response;
use crate::auth::AuthOwner;
use crate::error::AppError;
use crate::models::{new_id, Experience};
use crate::state::AppState;

const NOT_FOUND: &str = "Experience entry not found";

#[derive(Debug, Deserialize)]
pub struct CreateExperience {
    pub position: String,
    pub company: String,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_current: bool,
    pub description: Option<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub display_order: i32,
    pub is_visible: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateExperience {
    pub position: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_current: Option<bool>,
    pub description: Option<String>,
    pub responsibilities: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub display_order: Option<i32>,
    pub is_visible: Option<bool>,
}

/// `POST /api/experience`
pub async fn create_experience(
    State(state): State<AppState>,
    owner: AuthOwner,
    AppJson(body): AppJson<CreateExperience>,
) -> Result<Response, AppError> {
    let now = Utc::now();
    let entry = Experience {
        id: new_id(),
        owner_id: owner.id,
        position: body.position,
        company: body.company,
        location: body.location,
        start_date: body.start_date,
        end_date: body.end_date,
        is_current: body.is_current,
        description: body.description,
        responsibilities: body.responsibilities,
        technologies: body.technologies,
        display_order: body.display_order,
        is_visible: body.is_visible.unwrap_or(true),
        created_at: now,
        updated_at: now,
    };
    state.experience.insert(&entry).await?;

    Ok(response::created("experience", &entry))
}

/// `GET /api/experience`
pub async fn list_experience(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let entries = state.experience.list(&owner.id, doc! {}).await?;
    Ok(response::list("experience", &entries))
}

/// `GET /api/experience/{id}`
pub async fn get_experience(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let entry = state
        .experience
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(response::ok("experience", &entry))
}

/// `PUT /api/experience/{id}`
pub async fn update_experience(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
    AppJson(body): AppJson<UpdateExperience>,
) -> Result<Response, AppError> {
    let mut entry = state
        .experience
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if let Some(position) = body.position {
        entry.position = position;
    }
    if let Some(company) = body.company {
        entry.company = company;
    }
    if let Some(location) = body.location {
        entry.location = location;
    }
    if let Some(start_date) = body.start_date {
        entry.start_date = start_date;
    }
    if let Some(end_date) = body.end_date {
        entry.end_date = Some(end_date);
    }
    if let Some(is_current) = body.is_current {
        entry.is_current = is_current;
    }
    if let Some(description) = body.description {
        entry.description = Some(description);
    }
    if let Some(responsibilities) = body.responsibilities {
        entry.responsibilities = responsibilities;
    }
    if let Some(technologies) = body.technologies {
        entry.technologies = technologies;
    }
    if let Some(display_order) = body.display_order {
        entry.display_order = display_order;
    }
    if let Some(is_visible) = body.is_visible {
        entry.is_visible = is_visible;
    }

    entry.updated_at = Utc::now();
    state.experience.replace(&id, &owner.id, &entry).await?;

    Ok(response::ok("experience", &entry))
}

/// `DELETE /api/experience/{id}`
pub async fn delete_experience(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    if !state.experience.delete(&id, &owner.id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    Ok(response::message("Experience entry deleted successfully"))
}
