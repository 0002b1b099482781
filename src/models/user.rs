use serde::Serialize;
use sqlx::FromRow;

/// A row of the `users` table. The hash never leaves the storage layer;
/// serialization skips it so it cannot end up in a response or a log line.
#[derive(Debug, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
