//! Contact inbox controller. Message submission is the only public
//! mutation; everything else requires an authenticated owner.

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;

use crate::api::extract::AppJson;
use crate::api::response;
use crate::auth::AuthOwner;
use crate::error::AppError;
use crate::models::{new_id, ContactMessage, ContactStatus};
use crate::state::AppState;

const NOT_FOUND: &str = "Message not found";

#[derive(Debug, Deserialize)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactFilter {
    pub status: Option<ContactStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContactStatus {
    pub status: ContactStatus,
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Client address as reported by the reverse proxy.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for") {
        if let Ok(value) = forwarded.to_str() {
            if let Some(first) = value.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return Some(first.to_string());
                }
            }
        }
    }
    headers
        .get("x-real-ip")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `POST /api/contact` — public.
pub async fn create_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    AppJson(body): AppJson<CreateContact>,
) -> Result<Response, AppError> {
    for (field, value) in [
        ("name", &body.name),
        ("email", &body.email),
        ("subject", &body.subject),
        ("message", &body.message),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} is required")));
        }
    }
    if !is_valid_email(&body.email) {
        return Err(AppError::Validation("Please provide a valid email".into()));
    }

    let message = ContactMessage {
        id: new_id(),
        name: body.name,
        email: body.email,
        subject: body.subject,
        message: body.message,
        status: ContactStatus::Unread,
        ip_address: client_ip(&headers),
        created_at: Utc::now(),
        read_at: None,
    };
    state.contacts.insert(&message).await?;

    Ok(response::created_with_message(
        "Message sent successfully. We will get back to you soon!",
        "contact",
        &message,
    ))
}

/// `GET /api/contact` — optionally filtered by `?status=`.
pub async fn list_contacts(
    State(state): State<AppState>,
    _owner: AuthOwner,
    Query(filter): Query<ContactFilter>,
) -> Result<Response, AppError> {
    let messages = state.contacts.list(filter.status).await?;
    Ok(response::list("contacts", &messages))
}

/// `GET /api/contact/{id}` — reading an unread message moves it to `read`
/// and stamps `read_at`; later reads leave the stamp untouched.
pub async fn get_contact(
    State(state): State<AppState>,
    _owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let mut message = state
        .contacts
        .find(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    if message.status == ContactStatus::Unread {
        message.status = ContactStatus::Read;
        if message.read_at.is_none() {
            message.read_at = Some(Utc::now());
        }
        state.contacts.replace(&id, &message).await?;
    }

    Ok(response::ok("contact", &message))
}

/// `PATCH /api/contact/{id}/status`
pub async fn update_contact_status(
    State(state): State<AppState>,
    _owner: AuthOwner,
    Path(id): Path<String>,
    AppJson(body): AppJson<UpdateContactStatus>,
) -> Result<Response, AppError> {
    let mut message = state
        .contacts
        .find(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;

    message.status = body.status;
    if body.status == ContactStatus::Read && message.read_at.is_none() {
        message.read_at = Some(Utc::now());
    }
    state.contacts.replace(&id, &message).await?;

    Ok(response::ok("contact", &message))
}

/// `DELETE /api/contact/{id}`
pub async fn delete_contact(
    State(state): State<AppState>,
    _owner: AuthOwner,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    if !state.contacts.delete(&id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    Ok(response::message("Message deleted successfully"))
}

/// `GET /api/contact/stats` — total plus per-status counts.
pub async fn contact_stats(
    State(state): State<AppState>,
    _owner: AuthOwner,
) -> Result<Response, AppError> {
    let total = state.contacts.count(None).await?;
    let unread = state.contacts.count(Some(ContactStatus::Unread)).await?;
    let read = state.contacts.count(Some(ContactStatus::Read)).await?;
    let replied = state.contacts.count(Some(ContactStatus::Replied)).await?;
    let archived = state.contacts.count(Some(ContactStatus::Archived)).await?;

    let stats = json!({
        "total": total,
        "unread": unread,
        "read": read,
        "replied": replied,
        "archived": archived,
    });
    Ok(response::ok("stats", &stats))
}
