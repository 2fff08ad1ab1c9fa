//! Profile controller: singleton document plus two asset slots (image, CV).

use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;

use crate::api::forms::read_form;
use crate::api::response;
use crate::assets::{self, CV, PROFILE_IMAGE};
use crate::auth::AuthOwner;
use crate::error::AppError;
use crate::models::{new_id, Profile};
use crate::state::AppState;
use crate::storage::discard;

const NOT_FOUND: &str = "Profile not found";
const NOT_FOUND_CREATE_FIRST: &str = "Profile not found. Please create a profile first.";

/// `POST /api/profile` — multipart; optional image under `profile_image_url`.
pub async fn create_profile(
    State(state): State<AppState>,
    owner: AuthOwner,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (mut form, file) = read_form(multipart, "profile_image_url").await?;

    if state.profiles.find(&owner.id).await?.is_some() {
        return Err(AppError::Conflict(
            "Profile already exists, use update instead".into(),
        ));
    }

    let full_name = form.require("full_name")?;
    let title = form.require("title")?;
    let tagline = form.require("tagline")?;
    let location = form.require("location")?;
    let phone = form.require("phone")?;
    let social_links = form.take_json("social_links")?.unwrap_or_default();

    let mut profile_image_url = None;
    if let Some(file) = &file {
        profile_image_url = Some(assets::push(state.blobs.as_ref(), &PROFILE_IMAGE, &owner.id, file).await?);
    }

    let now = Utc::now();
    let profile = Profile {
        id: new_id(),
        owner_id: owner.id,
        full_name,
        title,
        tagline,
        location,
        phone,
        profile_image_url,
        cv_url: None,
        social_links,
        created_at: now,
        updated_at: now,
    };
    state.profiles.insert(&profile).await?;

    Ok(response::created("profile", &profile))
}

/// `GET /api/profile`
pub async fn get_profile(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let profile = state
        .profiles
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(response::ok("profile", &profile))
}

/// `PUT /api/profile` — partial merge; fields left out keep prior values.
pub async fn update_profile(
    State(state): State<AppState>,
    owner: AuthOwner,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (mut form, file) = read_form(multipart, "profile_image_url").await?;

    let mut profile = state
        .profiles
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if let Some(value) = form.take("full_name") {
        profile.full_name = value;
    }
    if let Some(value) = form.take("title") {
        profile.title = value;
    }
    if let Some(value) = form.take("tagline") {
        profile.tagline = value;
    }
    if let Some(value) = form.take("location") {
        profile.location = value;
    }
    if let Some(value) = form.take("phone") {
        profile.phone = value;
    }
    if let Some(links) = form.take_json("social_links")? {
        profile.social_links = links;
    }

    if let Some(file) = &file {
        profile.profile_image_url = Some(
            assets::swap(
                state.blobs.as_ref(),
                &PROFILE_IMAGE,
                &owner.id,
                file,
                profile.profile_image_url.as_deref(),
            )
            .await?,
        );
    }

    profile.updated_at = Utc::now();
    state.profiles.replace(&owner.id, &profile).await?;

    Ok(response::ok("profile", &profile))
}

/// `DELETE /api/profile` — retires both asset slots best-effort.
pub async fn delete_profile(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let profile = state
        .profiles
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    discard(state.blobs.as_ref(), profile.profile_image_url.as_deref()).await;
    discard(state.blobs.as_ref(), profile.cv_url.as_deref()).await;
    state.profiles.delete(&owner.id).await?;

    Ok(response::message("Profile deleted successfully"))
}

/// `POST /api/profile/image` — replace the profile image only.
pub async fn upload_profile_image(
    State(state): State<AppState>,
    owner: AuthOwner,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (_, file) = read_form(multipart, "profile_image_url").await?;
    let file = file.ok_or_else(|| AppError::Validation("Please upload an image file".into()))?;

    let mut profile = state
        .profiles
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_CREATE_FIRST.into()))?;

    profile.profile_image_url = Some(
        assets::swap(
            state.blobs.as_ref(),
            &PROFILE_IMAGE,
            &owner.id,
            &file,
            profile.profile_image_url.as_deref(),
        )
        .await?,
    );
    profile.updated_at = Utc::now();
    state.profiles.replace(&owner.id, &profile).await?;

    Ok(response::ok_with_message(
        "Profile image uploaded successfully",
        "profile",
        &profile,
    ))
}

/// `DELETE /api/profile/image`
pub async fn delete_profile_image(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let mut profile = state
        .profiles
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if profile.profile_image_url.is_none() {
        return Err(AppError::NotFound("No profile image found".into()));
    }

    discard(state.blobs.as_ref(), profile.profile_image_url.as_deref()).await;
    profile.profile_image_url = None;
    profile.updated_at = Utc::now();
    state.profiles.replace(&owner.id, &profile).await?;

    Ok(response::ok_with_message(
        "Profile image deleted successfully",
        "profile",
        &profile,
    ))
}

/// `POST /api/profile/cv` — replace the CV (PDF only).
pub async fn upload_cv(
    State(state): State<AppState>,
    owner: AuthOwner,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (_, file) = read_form(multipart, "cv_url").await?;
    let file = file.ok_or_else(|| AppError::Validation("Please upload a PDF file".into()))?;

    let mut profile = state
        .profiles
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND_CREATE_FIRST.into()))?;

    profile.cv_url = Some(
        assets::swap(
            state.blobs.as_ref(),
            &CV,
            &owner.id,
            &file,
            profile.cv_url.as_deref(),
        )
        .await?,
    );
    profile.updated_at = Utc::now();
    state.profiles.replace(&owner.id, &profile).await?;

    Ok(response::ok_with_message(
        "CV uploaded successfully",
        "profile",
        &profile,
    ))
}

/// `DELETE /api/profile/cv`
pub async fn delete_cv(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let mut profile = state
        .profiles
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if profile.cv_url.is_none() {
        return Err(AppError::NotFound("No CV found to delete".into()));
    }

    discard(state.blobs.as_ref(), profile.cv_url.as_deref()).await;
    profile.cv_url = None;
    profile.updated_at = Utc::now();
    state.profiles.replace(&owner.id, &profile).await?;

    Ok(response::ok_with_message(
        "CV deleted successfully",
        "profile",
        &profile,
    ))
}

/// `GET /api/profile/cv` — redirect to the blob URL for download.
pub async fn download_cv(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let profile = state
        .profiles
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound("CV not found".into()))?;

    match profile.cv_url.as_deref() {
        Some(url) => Ok(Redirect::temporary(url).into_response()),
        None => Err(AppError::NotFound("CV not found".into())),
    }
}
