use axum::{
    extract::{FromRef, Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{error::ApiError, state::AppState};

use super::{claims::Claims, jwt::JwtKeys};

/// Per-route authorization policy, attached at router build time and
/// evaluated against already-verified claims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthPolicy {
    AuthenticatedOnly,
    AdminOnly(String),
}

impl AuthPolicy {
    /// Admin gate for the configured admin email. With no admin configured
    /// the policy degrades to `AuthenticatedOnly`; this fallback is part of
    /// the contract, not an accident.
    pub fn admin_only(admin_email: Option<String>) -> Self {
        match admin_email {
            Some(email) if !email.trim().is_empty() => AuthPolicy::AdminOnly(email),
            _ => AuthPolicy::AuthenticatedOnly,
        }
    }

    pub fn authorize(&self, claims: &Claims) -> Result<(), ApiError> {
        match self {
            AuthPolicy::AuthenticatedOnly => Ok(()),
            AuthPolicy::AdminOnly(admin) if claims.sub == *admin => Ok(()),
            AuthPolicy::AdminOnly(_) => Err(ApiError::Forbidden),
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer ").or_else(|| v.strip_prefix("bearer ")))
}

/// Request gate. Verifies the bearer token, applies the route's policy and
/// stashes the claims in request extensions for downstream extractors.
///
/// Denials are distinguishable: no/invalid/expired token is 401, a valid
/// token held by the wrong principal is 403.
pub async fn enforce(
    State((state, policy)): State<(AppState, AuthPolicy)>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(req.headers()).ok_or(ApiError::Unauthenticated)?;

    let keys = JwtKeys::from_ref(&state);
    let claims = keys.verify(token).map_err(|e| {
        warn!(error = %e, "token verification failed");
        ApiError::Unauthenticated
    })?;

    policy.authorize(&claims)?;

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn claims_for(email: &str) -> Claims {
        Claims {
            sub: email.into(),
            jti: Uuid::new_v4(),
            exp: 4_102_444_800, // far future
        }
    }

    #[test]
    fn authenticated_only_admits_any_subject() {
        let policy = AuthPolicy::AuthenticatedOnly;
        assert!(policy.authorize(&claims_for("anyone@x.com")).is_ok());
    }

    #[test]
    fn admin_only_admits_the_configured_subject() {
        let policy = AuthPolicy::admin_only(Some("admin@solarne.test".into()));
        assert!(policy.authorize(&claims_for("admin@solarne.test")).is_ok());
    }

    #[test]
    fn admin_only_forbids_other_subjects() {
        let policy = AuthPolicy::admin_only(Some("admin@solarne.test".into()));
        let err = policy.authorize(&claims_for("user@solarne.test")).unwrap_err();
        assert!(matches!(err, ApiError::Forbidden));
    }

    #[test]
    fn subject_comparison_is_case_sensitive() {
        let policy = AuthPolicy::admin_only(Some("Admin@solarne.test".into()));
        assert!(policy.authorize(&claims_for("admin@solarne.test")).is_err());
    }

    #[test]
    fn unconfigured_admin_degrades_to_authenticated_only() {
        assert_eq!(AuthPolicy::admin_only(None), AuthPolicy::AuthenticatedOnly);
        assert_eq!(
            AuthPolicy::admin_only(Some("   ".into())),
            AuthPolicy::AuthenticatedOnly
        );
    }

    #[test]
    fn bearer_extraction_requires_the_scheme() {
        let mut headers = HeaderMap::new();
        assert!(bearer_token(&headers).is_none());

        headers.insert(header::AUTHORIZATION, "Token abc".parse().unwrap());
        assert!(bearer_token(&headers).is_none());

        headers.insert(header::AUTHORIZATION, "Bearer abc".parse().unwrap());
        assert_eq!(bearer_token(&headers), Some("abc"));
    }
}
