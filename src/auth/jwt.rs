use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

use crate::{config::AuthConfig, state::AppState};

use super::claims::Claims;

#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub ttl_minutes: i64,
}

impl axum::extract::FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        let AuthConfig {
            secret,
            ttl_minutes,
            ..
        } = state.config.auth.clone();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_minutes,
        }
    }
}

impl JwtKeys {
    /// Mint a bearer token for the given subject: fresh `jti`, expiry at
    /// now + configured TTL, HS256 over the configured secret.
    pub fn issue(&self, email: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::minutes(self.ttl_minutes);
        let claims = Claims {
            sub: email.to_string(),
            jti: Uuid::new_v4(),
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(sub = %claims.sub, jti = %claims.jti, "jwt issued");
        Ok(token)
    }

    /// Signature, expiry, and algorithm are all checked; tokens signed with
    /// anything other than HS256 are rejected outright.
    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(sub = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRef;

    fn make_keys() -> JwtKeys {
        JwtKeys::from_ref(&AppState::fake())
    }

    fn keys_with(secret: &str, ttl_minutes: i64) -> JwtKeys {
        JwtKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_minutes,
        }
    }

    #[tokio::test]
    async fn issue_and_verify_carries_subject() {
        let keys = make_keys();
        let token = keys.issue("a@x.com").expect("issue");
        let claims = keys.verify(&token).expect("verify");
        assert_eq!(claims.sub, "a@x.com");
    }

    #[tokio::test]
    async fn each_token_gets_a_fresh_jti() {
        let keys = make_keys();
        let a = keys.verify(&keys.issue("a@x.com").unwrap()).unwrap();
        let b = keys.verify(&keys.issue("a@x.com").unwrap()).unwrap();
        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn expired_token_is_rejected() {
        // Issuing with a negative TTL stands in for the clock moving past
        // the expiry instant.
        let keys = keys_with("dev-secret", -5);
        let token = keys.issue("a@x.com").expect("issue");
        assert!(keys.verify(&token).is_err());
    }

    #[test]
    fn token_outlives_checks_within_ttl() {
        let keys = keys_with("dev-secret", 60);
        let token = keys.issue("a@x.com").expect("issue");
        assert!(keys.verify(&token).is_ok());
    }

    #[test]
    fn wrong_secret_fails_verification() {
        let signer = keys_with("secret-a", 60);
        let verifier = keys_with("secret-b", 60);
        let token = signer.issue("a@x.com").expect("issue");
        assert!(verifier.verify(&token).is_err());
    }

    #[tokio::test]
    async fn tampered_claims_invalidate_signature() {
        let keys = make_keys();
        let token = keys.issue("a@x.com").expect("issue");

        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        assert_eq!(parts.len(), 3);
        let mut payload: Vec<u8> = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();

        assert!(keys.verify(&parts.join(".")).is_err());
    }

    #[test]
    fn foreign_algorithm_is_rejected() {
        let keys = keys_with("dev-secret", 60);
        let claims = Claims {
            sub: "a@x.com".into(),
            jti: Uuid::new_v4(),
            exp: (OffsetDateTime::now_utc() + TimeDuration::minutes(60)).unix_timestamp() as usize,
        };
        // Same secret, different algorithm in the header.
        let token = encode(&Header::new(Algorithm::HS384), &claims, &keys.encoding).unwrap();
        assert!(keys.verify(&token).is_err());
    }
}
