//!
//! # Custom Error Handling
//!
//! This module defines the custom error type `AppError` used throughout the
//! application. It centralizes error management so every failure a request can
//! hit maps to exactly one HTTP status and a JSON body.
//!
//! `AppError` implements `actix_web::error::ResponseError` to convert
//! application errors into HTTP responses. Credential and token failures
//! deliberately carry generic messages: the client learns the category
//! ("credentials" vs "token") and nothing more. Storage failures are logged
//! server-side and surface as an opaque 500 so raw driver text never reaches
//! the client.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// All failure modes a request can terminate with.
#[derive(Debug)]
pub enum AppError {
    /// Login failed. Covers both unknown username and password mismatch so the
    /// response cannot be used for username enumeration (HTTP 401).
    InvalidCredentials,
    /// Signup lost the race at the `users.username` unique constraint, or the
    /// name was simply taken (HTTP 409).
    DuplicateUser,
    /// No `Authorization: Bearer` header on a protected route (HTTP 401).
    TokenMissing,
    /// The token was well-formed and correctly signed but past its expiry
    /// (HTTP 401).
    TokenExpired,
    /// Signature mismatch, malformed structure, or an algorithm other than
    /// the one this server signs with (HTTP 401).
    TokenInvalid,
    /// A date/time field did not match any recognized grammar. Carries the
    /// name of the offending request field (HTTP 400).
    UnparsableDateTime(String),
    /// Request body failed the declared input constraints (HTTP 422).
    Validation(String),
    /// Database or hashing failure not otherwise classified. The message is
    /// for the server log only and is never sent to the client (HTTP 500).
    Storage(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::InvalidCredentials => write!(f, "invalid username or password"),
            AppError::DuplicateUser => write!(f, "username is already registered"),
            AppError::TokenMissing => write!(f, "missing bearer token"),
            AppError::TokenExpired => write!(f, "token has expired"),
            AppError::TokenInvalid => write!(f, "invalid token"),
            AppError::UnparsableDateTime(field) => {
                write!(f, "unparsable date/time in field '{}'", field)
            }
            AppError::Validation(msg) => write!(f, "validation failed: {}", msg),
            AppError::Storage(msg) => write!(f, "storage failure: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials
            | AppError::TokenMissing
            | AppError::TokenExpired
            | AppError::TokenInvalid => StatusCode::UNAUTHORIZED,
            AppError::DuplicateUser => StatusCode::CONFLICT,
            AppError::UnparsableDateTime(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Storage(detail) = self {
            log::error!("storage failure: {}", detail);
            return HttpResponse::InternalServerError().json(json!({
                "error": "internal server error"
            }));
        }
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}

/// Database errors become `Storage`; unique-constraint mapping to
/// `DuplicateUser` happens at the insert site in `db::users`, where the
/// violated constraint is known.
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> AppError {
        AppError::Storage(error.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(error: ValidationErrors) -> AppError {
        AppError::Validation(error.to_string())
    }
}

/// Hashing failures are infrastructure problems, not bad credentials.
impl From<bcrypt::BcryptError> for AppError {
    fn from(error: bcrypt::BcryptError) -> AppError {
        AppError::Storage(error.to_string())
    }
}
