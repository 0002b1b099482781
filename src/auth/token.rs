use crate::error::AppError;
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime. Short-lived by design: rotating the signing secret only
/// strands tokens for at most this long.
const TOKEN_LIFETIME_SECS: i64 = 60 * 60;

/// Claims encoded within an issued JWT.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's id.
    pub sub: i32,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Issues an HS256-signed token for `user_id`, expiring one hour from now.
/// The secret is the process-wide value loaded into `Config` at startup.
pub fn issue_token(user_id: i32, secret: &str) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::seconds(TOKEN_LIFETIME_SECS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Storage(format!("failed to sign token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded user id.
///
/// The accepted algorithm is pinned to HS256; a token whose header names any
/// other algorithm is rejected as invalid regardless of its signature.
pub fn verify_token(token: &str, secret: &str) -> Result<i32, AppError> {
    let validation = Validation::new(Algorithm::HS256);
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims.sub)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::TokenExpired,
        _ => AppError::TokenInvalid,
    })
}
