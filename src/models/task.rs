use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::error::AppError;
use crate::schedule::{self, LocalStamp};

/// Client body for `POST /Addtask`.
///
/// The schedule arrives either as the legacy single `date` field or as a
/// `startdate`/`enddate` pair; the field names (including `nottime` for the
/// notice lead time) are the wire contract with the existing frontend.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskInput {
    /// Task title (required).
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Free-form category string, e.g. "schedule", "task", "event".
    #[validate(length(min = 1, max = 200))]
    pub kind: String,
    #[validate(length(max = 200))]
    pub place: Option<String>,
    /// Notice lead time in minutes before the start.
    pub nottime: Option<i32>,
    #[validate(length(max = 200))]
    pub url: Option<String>,
    #[validate(length(max = 200))]
    pub memo: Option<String>,
    /// Legacy single-moment schedule.
    pub date: Option<String>,
    /// Interval schedule, used together with `enddate`.
    pub startdate: Option<String>,
    pub enddate: Option<String>,
}

impl TaskInput {
    /// Resolves the raw schedule fields into normalized endpoints.
    ///
    /// A `startdate`/`enddate` pair wins over the legacy `date`; a lone
    /// `startdate` is treated like `date`. An `enddate` without a
    /// `startdate` is ignored, even if `date` is present: an interval needs
    /// both endpoints, so the task is stored as single-moment. Having no
    /// schedule field at all is reported against `date`, the field the
    /// oldest clients send.
    pub fn schedule(&self) -> Result<(LocalStamp, Option<LocalStamp>), AppError> {
        match (&self.startdate, &self.enddate) {
            (Some(start), Some(end)) => {
                let (start, end) =
                    schedule::normalize_range("startdate", start, "enddate", end)?;
                Ok((start, Some(end)))
            }
            (Some(start), None) => Ok((schedule::normalize("startdate", start)?, None)),
            _ => match &self.date {
                Some(date) => Ok((schedule::normalize("date", date)?, None)),
                None => Err(AppError::UnparsableDateTime("date".to_string())),
            },
        }
    }
}

/// A fully normalized task, ready for insertion.
#[derive(Debug)]
pub struct NewTask {
    pub title: String,
    pub kind: String,
    pub place: Option<String>,
    pub notice: Option<i32>,
    pub url: Option<String>,
    pub memo: Option<String>,
    pub start_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
}

impl NewTask {
    pub fn new(input: TaskInput, start: LocalStamp, end: Option<LocalStamp>) -> Self {
        Self {
            title: input.title,
            kind: input.kind,
            place: input.place,
            notice: input.nottime,
            url: input.url,
            memo: input.memo,
            start_date: start.date,
            start_time: start.time,
            end_date: end.map(|e| e.date),
            end_time: end.and_then(|e| e.time),
        }
    }
}

/// A row of the `tasks` table.
#[derive(Debug, FromRow)]
pub struct TaskRecord {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub kind: String,
    pub place: Option<String>,
    pub notice: Option<i32>,
    pub url: Option<String>,
    pub memo: Option<String>,
    pub start_date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
}

/// Listing serialization of a task. Dates render as `YYYY-MM-DD`; times as
/// zero-padded 24-hour `HH:MM`, or JSON null when absent (all-day).
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskView {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub kind: String,
    pub place: Option<String>,
    pub nottime: Option<i32>,
    pub url: Option<String>,
    pub memo: Option<String>,
    pub startdate: String,
    pub starttime: Option<String>,
    pub enddate: Option<String>,
    pub endtime: Option<String>,
}

impl From<TaskRecord> for TaskView {
    fn from(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            title: record.title,
            kind: record.kind,
            place: record.place,
            nottime: record.notice,
            url: record.url,
            memo: record.memo,
            startdate: record.start_date.format("%Y-%m-%d").to_string(),
            starttime: record.start_time.map(|t| t.format("%H:%M").to_string()),
            enddate: record.end_date.map(|d| d.format("%Y-%m-%d").to_string()),
            endtime: record.end_time.map(|t| t.format("%H:%M").to_string()),
        }
    }
}
