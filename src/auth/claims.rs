use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT payload. Tokens are self-contained: verification never consults the
/// database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // subject email
    pub jti: Uuid,   // unique token id
    pub exp: usize,  // expires at (unix timestamp)
}
