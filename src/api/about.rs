//! About controller: one "about me" document per owner, JSON body.

use axum::extract::State;
use axum::response::Response;
use chrono::Utc;
use serde::Deserialize;

use crate::api::extract::AppJson;
use crate::api::response;
use crate::auth::AuthOwner;
use crate::error::AppError;
use crate::models::{new_id, About};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateAbout {
    pub heading: String,
    pub subheading: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateAbout {
    pub heading: Option<String>,
    pub subheading: Option<String>,
    pub description: Option<String>,
    pub highlights: Option<Vec<String>>,
}

/// `POST /api/about`
pub async fn create_about(
    State(state): State<AppState>,
    owner: AuthOwner,
    AppJson(body): AppJson<CreateAbout>,
) -> Result<Response, AppError> {
    if state.abouts.find(&owner.id).await?.is_some() {
        return Err(AppError::Conflict(
            "About section already exists, use update instead".into(),
        ));
    }

    let now = Utc::now();
    let about = About {
        id: new_id(),
        owner_id: owner.id,
        heading: body.heading,
        subheading: body.subheading,
        description: body.description,
        highlights: body.highlights,
        created_at: now,
        updated_at: now,
    };
    state.abouts.insert(&about).await?;

    Ok(response::created("about", &about))
}

/// `GET /api/about`
pub async fn get_about(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let about = state
        .abouts
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound("About section not found".into()))?;
    Ok(response::ok("about", &about))
}

/// `PUT /api/about` — omitted fields keep their prior values.
pub async fn update_about(
    State(state): State<AppState>,
    owner: AuthOwner,
    AppJson(body): AppJson<UpdateAbout>,
) -> Result<Response, AppError> {
    let mut about = state
        .abouts
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound("About section not found".into()))?;

    if let Some(heading) = body.heading {
        about.heading = heading;
    }
    if let Some(subheading) = body.subheading {
        about.subheading = subheading;
    }
    if let Some(description) = body.description {
        about.description = description;
    }
    if let Some(highlights) = body.highlights {
        about.highlights = highlights;
    }

    about.updated_at = Utc::now();
    state.abouts.replace(&owner.id, &about).await?;

    Ok(response::ok("about", &about))
}

/// `DELETE /api/about`
pub async fn delete_about(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    if !state.abouts.delete(&owner.id).await? {
        return Err(AppError::NotFound("About section not found".into()));
    }
    Ok(response::message("About section deleted successfully"))
}
