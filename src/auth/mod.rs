pub mod extractors;
pub mod password;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::AuthenticatedUserId;
pub use password::{hash_password, verify_password};
pub use token::{issue_token, verify_token, Claims};

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Payload for `POST /` (login).
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Payload for `POST /Signup`.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    /// Desired username. 3-100 characters, alphanumeric plus underscore and
    /// hyphen.
    #[validate(
        length(min = 3, max = 100),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    /// Password. At least 6 characters; stored only as a bcrypt hash.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Body of a successful login: a human-readable message and the bearer token
/// the client presents on task submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Body of a successful signup.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
