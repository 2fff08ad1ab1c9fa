//! Access gate: bearer-token verification and owner resolution.
//!
//! Token issuance happens elsewhere; this side only verifies an HS256
//! signature, checks expiry and confirms the subject still exists.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

/// Claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Owner identifier.
    pub sub: String,
    /// Expiry (Unix seconds).
    pub exp: i64,
}

/// Verify signature and expiry. Every failure collapses into the same
/// `Unauthorized` so the caller cannot distinguish why verification failed.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

/// The authenticated owner, resolved from the `Authorization` header.
///
/// Add as a handler parameter to require authentication; every store call
/// scopes by `owner.id`.
#[derive(Debug, Clone)]
pub struct AuthOwner {
    pub id: String,
}

impl FromRequestParts<AppState> for AuthOwner {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;
        let claims = verify_token(token, &state.jwt_secret)?;

        // The subject must still resolve to an owner record; a token for a
        // removed account is as invalid as a forged one.
        state
            .users
            .find(&claims.sub)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(AuthOwner { id: claims.sub })
    }
}

/// Sign an access token. Used by tests and provisioning tooling; the API
/// itself never issues tokens.
pub fn sign_token(owner_id: &str, secret: &str, ttl_seconds: i64) -> Result<String, AppError> {
    let claims = Claims {
        sub: owner_id.to_string(),
        exp: chrono::Utc::now().timestamp() + ttl_seconds,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let token = sign_token("owner-1", "secret", 3600).unwrap();
        let claims = verify_token(&token, "secret").unwrap();
        assert_eq!(claims.sub, "owner-1");
    }

    #[test]
    fn wrong_secret_rejected() {
        let token = sign_token("owner-1", "secret", 3600).unwrap();
        assert!(matches!(
            verify_token(&token, "other-secret"),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn expired_token_rejected() {
        let token = sign_token("owner-1", "secret", -3600).unwrap();
        assert!(verify_token(&token, "secret").is_err());
    }

    #[test]
    fn garbage_rejected() {
        assert!(verify_token("not.a.token", "secret").is_err());
    }
}
