//!
//! # Credential Store
//!
//! Persists username + bcrypt hash and verifies login attempts. Username
//! uniqueness is enforced by the `users.username` UNIQUE constraint; two
//! concurrent signups race at the index and the loser gets `DuplicateUser`,
//! never a silent overwrite.

use sqlx::PgPool;

use crate::auth::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::models::User;

/// Postgres SQLSTATE for unique-constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Hashes the password and inserts a new user row. Returns the new user's id.
pub async fn register(pool: &PgPool, username: &str, password: &str) -> Result<i32, AppError> {
    let password_hash = hash_password(password)?;

    let result = sqlx::query_as::<_, (i32,)>(
        "INSERT INTO users (username, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(username)
    .bind(&password_hash)
    .fetch_one(pool)
    .await;

    match result {
        Ok((id,)) => Ok(id),
        Err(e) => Err(classify_insert_error(e)),
    }
}

/// Checks a username/password pair and returns the user's id on success.
///
/// An unknown username and a wrong password both collapse into the same
/// `InvalidCredentials`, so the response cannot be used to probe which
/// usernames exist.
pub async fn verify_credentials(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<i32, AppError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    match user {
        Some(user) if verify_password(password, &user.password_hash)? => Ok(user.id),
        _ => Err(AppError::InvalidCredentials),
    }
}

fn classify_insert_error(error: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &error {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return AppError::DuplicateUser;
        }
    }
    error.into()
}
