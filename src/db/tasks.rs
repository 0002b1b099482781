//!
//! # Task Repository
//!
//! Insert and list task rows. Absent optional fields are stored as SQL NULL,
//! keeping "not provided" distinct from "provided empty". Listing is
//! deliberately unfiltered across users (compatibility with the original
//! behavior); ordering by id keeps the result deterministic.

use sqlx::PgPool;

use crate::error::AppError;
use crate::models::{NewTask, TaskRecord};

const TASK_COLUMNS: &str = "id, user_id, title, kind, place, notice, url, memo, \
     start_date, start_time, end_date, end_time";

/// Inserts one task row owned by `user_id` and returns the stored record.
pub async fn create(pool: &PgPool, user_id: i32, task: NewTask) -> Result<TaskRecord, AppError> {
    let sql = format!(
        "INSERT INTO tasks \
           (user_id, title, kind, place, notice, url, memo, \
            start_date, start_time, end_date, end_time) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
         RETURNING {}",
        TASK_COLUMNS
    );

    let record = sqlx::query_as::<_, TaskRecord>(&sql)
        .bind(user_id)
        .bind(task.title)
        .bind(task.kind)
        .bind(task.place)
        .bind(task.notice)
        .bind(task.url)
        .bind(task.memo)
        .bind(task.start_date)
        .bind(task.start_time)
        .bind(task.end_date)
        .bind(task.end_time)
        .fetch_one(pool)
        .await?;

    Ok(record)
}

/// Returns every task row, across all users.
pub async fn list_all(pool: &PgPool) -> Result<Vec<TaskRecord>, AppError> {
    let sql = format!("SELECT {} FROM tasks ORDER BY id", TASK_COLUMNS);
    let tasks = sqlx::query_as::<_, TaskRecord>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(tasks)
}
