//! Site-settings controller: one settings document per owner, JSON body,
//! plus two image slots (logo, favicon) handled as multipart uploads.

use axum::extract::{Multipart, State};
use axum::response::Response;
use chrono::Utc;
use serde::Deserialize;

use crate::api::extract::AppJson;
use crate::api::forms::read_form;
use crate::api::response;
use crate::assets::{self, FAVICON, SITE_LOGO};
use crate::auth::AuthOwner;
use crate::error::AppError;
use crate::models::{
    new_id, AnalyticsSettings, SeoSettings, SiteSettings, ThemeSettings,
};
use crate::state::AppState;
use crate::storage::discard;

const NOT_FOUND: &str = "Site settings not found";

#[derive(Debug, Default, Deserialize)]
pub struct CreateSiteSettings {
    pub site_title: Option<String>,
    pub site_description: Option<String>,
    #[serde(default)]
    pub theme_settings: ThemeSettings,
    #[serde(default)]
    pub seo_settings: SeoSettings,
    #[serde(default)]
    pub analytics_settings: AnalyticsSettings,
    #[serde(default)]
    pub maintenance_mode: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSiteSettings {
    pub site_title: Option<String>,
    pub site_description: Option<String>,
    pub theme_settings: Option<ThemeSettings>,
    pub seo_settings: Option<SeoSettings>,
    pub analytics_settings: Option<AnalyticsSettings>,
    pub maintenance_mode: Option<bool>,
}

/// `POST /api/settings`
pub async fn create_settings(
    State(state): State<AppState>,
    owner: AuthOwner,
    AppJson(body): AppJson<CreateSiteSettings>,
) -> Result<Response, AppError> {
    if state.settings.find(&owner.id).await?.is_some() {
        return Err(AppError::Conflict(
            "Site settings already exist, use update instead".into(),
        ));
    }

    let now = Utc::now();
    let settings = SiteSettings {
        id: new_id(),
        owner_id: owner.id,
        site_title: body.site_title.unwrap_or_else(|| "My Portfolio".into()),
        site_description: body.site_description.unwrap_or_default(),
        site_logo_url: None,
        favicon_url: None,
        theme_settings: body.theme_settings,
        seo_settings: body.seo_settings,
        analytics_settings: body.analytics_settings,
        maintenance_mode: body.maintenance_mode,
        created_at: now,
        updated_at: now,
    };
    state.settings.insert(&settings).await?;

    Ok(response::created("settings", &settings))
}

/// `GET /api/settings`
pub async fn get_settings(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let settings = state
        .settings
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(response::ok("settings", &settings))
}

/// `PUT /api/settings` — nested settings blocks replace as a whole when
/// present; omitted blocks keep their prior values.
pub async fn update_settings(
    State(state): State<AppState>,
    owner: AuthOwner,
    AppJson(body): AppJson<UpdateSiteSettings>,
) -> Result<Response, AppError> {
    let mut settings = state
        .settings
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if let Some(site_title) = body.site_title {
        settings.site_title = site_title;
    }
    if let Some(site_description) = body.site_description {
        settings.site_description = site_description;
    }
    if let Some(theme) = body.theme_settings {
        settings.theme_settings = theme;
    }
    if let Some(seo) = body.seo_settings {
        settings.seo_settings = seo;
    }
    if let Some(analytics) = body.analytics_settings {
        settings.analytics_settings = analytics;
    }
    if let Some(maintenance_mode) = body.maintenance_mode {
        settings.maintenance_mode = maintenance_mode;
    }

    settings.updated_at = Utc::now();
    state.settings.replace(&owner.id, &settings).await?;

    Ok(response::ok("settings", &settings))
}

/// `DELETE /api/settings` — retires logo and favicon blobs.
pub async fn delete_settings(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let settings = state
        .settings
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    discard(state.blobs.as_ref(), settings.site_logo_url.as_deref()).await;
    discard(state.blobs.as_ref(), settings.favicon_url.as_deref()).await;
    state.settings.delete(&owner.id).await?;

    Ok(response::message("Site settings deleted successfully"))
}

/// `POST /api/settings/logo` — multipart, file part `logo`.
pub async fn upload_logo(
    State(state): State<AppState>,
    owner: AuthOwner,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (_, file) = read_form(multipart, "logo").await?;
    let file = file.ok_or_else(|| AppError::Validation("Please upload an image file".into()))?;

    let mut settings = state
        .settings
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    settings.site_logo_url = Some(
        assets::swap(
            state.blobs.as_ref(),
            &SITE_LOGO,
            &owner.id,
            &file,
            settings.site_logo_url.as_deref(),
        )
        .await?,
    );
    settings.updated_at = Utc::now();
    state.settings.replace(&owner.id, &settings).await?;

    Ok(response::ok_with_message(
        "Logo uploaded successfully",
        "settings",
        &settings,
    ))
}

/// `DELETE /api/settings/logo`
pub async fn delete_logo(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let mut settings = state
        .settings
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if settings.site_logo_url.is_none() {
        return Err(AppError::NotFound("No logo found".into()));
    }

    discard(state.blobs.as_ref(), settings.site_logo_url.as_deref()).await;
    settings.site_logo_url = None;
    settings.updated_at = Utc::now();
    state.settings.replace(&owner.id, &settings).await?;

    Ok(response::ok_with_message(
        "Logo deleted successfully",
        "settings",
        &settings,
    ))
}

/// `POST /api/settings/favicon` — multipart, file part `favicon`.
pub async fn upload_favicon(
    State(state): State<AppState>,
    owner: AuthOwner,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (_, file) = read_form(multipart, "favicon").await?;
    let file = file.ok_or_else(|| AppError::Validation("Please upload an image file".into()))?;

    let mut settings = state
        .settings
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    settings.favicon_url = Some(
        assets::swap(
            state.blobs.as_ref(),
            &FAVICON,
            &owner.id,
            &file,
            settings.favicon_url.as_deref(),
        )
        .await?,
    );
    settings.updated_at = Utc::now();
    state.settings.replace(&owner.id, &settings).await?;

    Ok(response::ok_with_message(
        "Favicon uploaded successfully",
        "settings",
        &settings,
    ))
}

/// `DELETE /api/settings/favicon`
pub async fn delete_favicon(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let mut settings = state
        .settings
        .find(&owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if settings.favicon_url.is_none() {
        return Err(AppError::NotFound("No favicon found".into()));
    }

    discard(state.blobs.as_ref(), settings.favicon_url.as_deref()).await;
    settings.favicon_url = None;
    settings.updated_at = Utc::now();
    state.settings.replace(&owner.id, &settings).await?;

    Ok(response::ok_with_message(
        "Favicon deleted successfully",
        "settings",
        &settings,
    ))
}
