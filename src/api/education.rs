//! Education controller: owner-scoped list resource, JSON body.

use axum::extract::{Path, State};
use axum::response::Response;
use chrono::{DateTime, Utc};
use mongodb::bson::doc;
use serde::Deserialize;

use crate::api::extract::AppJson;
use crate::api::response;
use crate::auth::AuthOwner;
use crate::error::AppError;
use crate::models::{new_id, Education};
use crate::state::AppState;

const NOT_FOUND: &str = "Education entry not found";

#[derive(Debug, Deserialize)]
pub struct CreateEducation {
    pub degree: String,
    pub institution: String,
    pub field_of_study: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_current: bool,
    pub description: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub display_order: i32,
    pub is_visible: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEducation {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_current: Option<bool>,
    pub description: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub display_order: Option<i32>,
    pub is_visible: Option<bool>,
}

/// `POST /api/education`
pub async fn create_education(
    State(state): State<AppState>,
    owner: AuthOwner,
    AppJson(body): AppJson<CreateEducation>,
) -> Result<Response, AppError> {
    let now = Utc::now();
    let entry = Education {
        id: new_id(),
        owner_id: owner.id,
        degree: body.degree,
        institution: body.institution,
        field_of_study: body.field_of_study,
        start_date: body.start_date,
        end_date: body.end_date,
        is_current: body.is_current,
        description: body.description,
        highlights: body.highlights,
        display_order: body.display_order,
        is_visible: body.is_visible.unwrap_or(true),
        created_at: now,
        updated_at: now,
    };
    state.education.insert(&entry).await?;

    Ok(response::created("education", &entry))
}

/// `GET /api/education`
pub async fn list_education(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let entries = state.education.list(&owner.id, doc! {}).await?;
    Ok(response::list("education", &entries))
}

/// `GET /api/education/{id}`
pub async fn get_education(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let entry = state
        .education
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(response::ok("education", &entry))
}

/// `PUT /api/education/{id}`
pub async fn update_education(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
    AppJson(body): AppJson<UpdateEducation>,
) -> Result<Response, AppError> {
    let mut entry = state
        .education
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if let Some(degree) = body.degree {
        entry.degree = degree;
    }
    if let Some(institution) = body.institution {
        entry.institution = institution;
    }
    if let Some(field_of_study) = body.field_of_study {
        entry.field_of_study = field_of_study;
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
    if let Some(highlights) = body.highlights {
        entry.highlights = highlights;
    }
    if let Some(display_order) = body.display_order {
        entry.display_order = display_order;
    }
    if let Some(is_visible) = body.is_visible {
        entry.is_visible = is_visible;
    }

    entry.updated_at = Utc::now();
    state.education.replace(&id, &owner.id, &entry).await?;

    Ok(response::ok("education", &entry))
}

/// `DELETE /api/education/{id}`
pub async fn delete_education(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    if !state.education.delete(&id, &owner.id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    Ok(response::message("Education entry deleted successfully"))
}
