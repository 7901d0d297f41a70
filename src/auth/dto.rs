use serde::{Deserialize, Serialize};

/// Request body shared by signup and login. The plaintext password lives
/// only for the duration of the call and is never logged or persisted.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Created-identity confirmation: the email only, never the hash.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_response_exposes_only_the_email() {
        let json = serde_json::to_string(&SignupResponse {
            email: "admin@solarne.test".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"email":"admin@solarne.test"}"#);
    }

    #[test]
    fn token_response_serialization() {
        let json = serde_json::to_string(&TokenResponse {
            token: "abc.def.ghi".into(),
        })
        .unwrap();
        assert!(json.contains("token"));
        assert!(json.contains("abc.def.ghi"));
    }
}
