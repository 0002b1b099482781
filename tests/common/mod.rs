//! Shared setup for the DB-backed integration tests.
//!
//! These tests assume `DATABASE_URL` points at a dedicated scratch database:
//! they create the schema if it is missing and delete rows freely.

use sqlx::PgPool;
use taskline::config::Config;

pub const JWT_SECRET: &str = "integration-test-secret";

/// Connects to the scratch database, creating the schema on first use.
/// Returns `None` (and the caller skips) when `DATABASE_URL` is unset.
pub async fn connect_or_skip() -> Option<PgPool> {
    dotenv::dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("DATABASE_URL not set, skipping DB-backed integration test");
            return None;
        }
    };
    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test DB");
    ensure_schema(&pool).await;
    Some(pool)
}

async fn ensure_schema(pool: &PgPool) {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await
    .expect("failed to create users table");
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS tasks (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL REFERENCES users (id),
            title TEXT NOT NULL,
            kind TEXT NOT NULL,
            place TEXT,
            notice INTEGER,
            url TEXT,
            memo TEXT,
            start_date DATE NOT NULL,
            start_time TIME,
            end_date DATE,
            end_time TIME
        )",
    )
    .execute(pool)
    .await
    .expect("failed to create tasks table");
}

pub fn test_config(database_url: String) -> Config {
    Config {
        database_url,
        jwt_secret: JWT_SECRET.to_string(),
        server_port: 8080,
        server_host: "127.0.0.1".to_string(),
    }
}

/// Deletes a test user and everything they own, tasks first for the foreign
/// key.
pub async fn remove_user(pool: &PgPool, username: &str) {
    let _ = sqlx::query(
        "DELETE FROM tasks WHERE user_id IN (SELECT id FROM users WHERE username = $1)",
    )
    .bind(username)
    .execute(pool)
    .await;
    let _ = sqlx::query("DELETE FROM users WHERE username = $1")
        .bind(username)
        .execute(pool)
        .await;
}
