use axum::{
    extract::{FromRef, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{error::ApiError, state::AppState};

use super::{
    dto::{CredentialsRequest, SignupResponse, TokenResponse},
    extractors::AuthUser,
    jwt::JwtKeys,
    password::{hash_password, verify_password},
    repo::User,
};

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Admin-gated user creation. The policy gate has already run; `admin` here
/// is whoever it admitted.
#[instrument(skip(state, admin, payload))]
pub async fn signup(
    State(state): State<AppState>,
    AuthUser(admin): AuthUser,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(StatusCode, HeaderMap, Json<SignupResponse>), ApiError> {
    if !is_valid_email(&payload.email) {
        warn!("signup with invalid email shape");
        return Err(ApiError::Validation("invalid email".into()));
    }
    if payload.password.len() < 8 {
        warn!("signup password too short");
        return Err(ApiError::Validation("password too short".into()));
    }

    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "signup for existing email");
        return Err(ApiError::Conflict);
    }

    let hash = hash_password(&payload.password)?;
    // The unique constraint on users.email settles any race with a
    // concurrent signup; its violation maps to the same Conflict.
    let user = User::create(&state.db, &payload.email, &hash).await?;

    info!(user_id = %user.id, email = %user.email, created_by = %admin.sub, "user created");

    let mut headers = HeaderMap::new();
    headers.insert(header::LOCATION, "/login".parse().unwrap());
    Ok((
        StatusCode::CREATED,
        headers,
        Json(SignupResponse { email: user.email }),
    ))
}

/// Credential check and token issuance. Unknown email and wrong password
/// take the same exit so the response leaks nothing about registered
/// accounts.
#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!("login for unknown email");
            return Err(ApiError::InvalidCredentials);
        }
    };

    if !verify_password(&payload.password, &user.password_hash) {
        warn!(user_id = %user.id, "login with wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let token = keys.issue(&user.email)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("admin@solarne.test"));
        assert!(is_valid_email("User@x.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@x"));
    }
}
