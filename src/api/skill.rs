//! Skill controller: owner-scoped list resource with an icon slot.

use axum::extract::{Multipart, Path, State};
use axum::response::Response;
use chrono::Utc;
use mongodb::bson::doc;

use crate::api::forms::{read_form, FormMap};
use crate::api::response;
use crate::assets::{self, SKILL_ICON};
use crate::auth::AuthOwner;
use crate::error::AppError;
use crate::models::{new_id, Skill, SkillCategory};
use crate::state::AppState;
use crate::storage::discard;

const NOT_FOUND: &str = "Skill not found";

fn take_category(form: &mut FormMap) -> Result<Option<SkillCategory>, AppError> {
    match form.take("category") {
        Some(raw) => serde_json::from_value(serde_json::Value::String(raw))
            .map(Some)
            .map_err(|_| AppError::Validation("Invalid skill category".into())),
        None => Ok(None),
    }
}

fn check_proficiency(value: i32) -> Result<i32, AppError> {
    if (0..=100).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::Validation(
            "Proficiency must be between 0 and 100".into(),
        ))
    }
}

/// `POST /api/skills` — multipart; optional icon under `icon_url`.
pub async fn create_skill(
    State(state): State<AppState>,
    owner: AuthOwner,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (mut form, file) = read_form(multipart, "icon_url").await?;

    let name = form.require("name")?;
    let category = take_category(&mut form)?
        .ok_or_else(|| AppError::Validation("category is required".into()))?;
    let proficiency = form
        .take_parsed("proficiency")?
        .ok_or_else(|| AppError::Validation("proficiency is required".into()))?;
    let proficiency = check_proficiency(proficiency)?;
    let display_order = form.take_parsed("display_order")?.unwrap_or(0);
    let is_visible = form.take_parsed("is_visible")?.unwrap_or(true);

    let mut icon_url = None;
    if let Some(file) = &file {
        icon_url = Some(assets::push(state.blobs.as_ref(), &SKILL_ICON, &owner.id, file).await?);
    }

    let now = Utc::now();
    let skill = Skill {
        id: new_id(),
        owner_id: owner.id,
        name,
        category,
        proficiency,
        icon_url,
        display_order,
        is_visible,
        created_at: now,
        updated_at: now,
    };
    state.skills.insert(&skill).await?;

    Ok(response::created("skill", &skill))
}

/// `GET /api/skills`
pub async fn list_skills(
    State(state): State<AppState>,
    owner: AuthOwner,
) -> Result<Response, AppError> {
    let skills = state.skills.list(&owner.id, doc! {}).await?;
    Ok(response::list("skills", &skills))
}

/// `GET /api/skills/{id}`
pub async fn get_skill(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let skill = state
        .skills
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(response::ok("skill", &skill))
}

/// `PUT /api/skills/{id}` — multipart partial merge; a new icon replaces
/// and retires the old one.
pub async fn update_skill(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let (mut form, file) = read_form(multipart, "icon_url").await?;

    let mut skill = state
        .skills
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if let Some(name) = form.take("name") {
        skill.name = name;
    }
    if let Some(category) = take_category(&mut form)? {
        skill.category = category;
    }
    if let Some(proficiency) = form.take_parsed("proficiency")? {
        skill.proficiency = check_proficiency(proficiency)?;
    }
    if let Some(display_order) = form.take_parsed("display_order")? {
        skill.display_order = display_order;
    }
    if let Some(is_visible) = form.take_parsed("is_visible")? {
        skill.is_visible = is_visible;
    }

    if let Some(file) = &file {
        skill.icon_url = Some(
            assets::swap(
                state.blobs.as_ref(),
                &SKILL_ICON,
                &owner.id,
                file,
                skill.icon_url.as_deref(),
            )
            .await?,
        );
    }

    skill.updated_at = Utc::now();
    state.skills.replace(&id, &owner.id, &skill).await?;

    Ok(response::ok("skill", &skill))
}

/// `DELETE /api/skills/{id}` — retires the icon blob.
pub async fn delete_skill(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let skill = state
        .skills
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    discard(state.blobs.as_ref(), skill.icon_url.as_deref()).await;
    state.skills.delete(&id, &owner.id).await?;

    Ok(response::message("Skill deleted successfully"))
}

/// `DELETE /api/skills/{id}/icon`
pub async fn delete_skill_icon(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let mut skill = state
        .skills
        .find(&id, &owner.id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if skill.icon_url.is_none() {
        return Err(AppError::NotFound("No skill icon found".into()));
    }

    discard(state.blobs.as_ref(), skill.icon_url.as_deref()).await;
    skill.icon_url = None;
    skill.updated_at = Utc::now();
    state.skills.replace(&id, &owner.id, &skill).await?;

    Ok(response::ok_with_message(
        "Skill icon deleted successfully",
        "skill",
        &skill,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_bounds() {
        assert!(check_proficiency(0).is_ok());
        assert!(check_proficiency(100).is_ok());
        assert!(check_proficiency(-1).is_err());
        assert!(check_proficiency(101).is_err());
    }
}
