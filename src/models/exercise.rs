use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{FromSqliteRow, User};
use crate::dates::format_date;
use crate::error::Result;
use crate::validation::{
    optional_date, optional_positive_integer, require_positive_integer, require_text,
    NumberOrText,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub id: String,
    pub user_id: String,
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            description: row.get("description")?,
            duration: row.get("duration")?,
            date: row.get("date")?,
            created_at: row.get("created_at")?,
        })
    }
}

/// Exercise fields as submitted, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct CreateExercise {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<NumberOrText>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

impl CreateExercise {
    /// A missing or blank `date` falls back to `today`; a malformed one is rejected.
    pub fn validate(&self, today: NaiveDate) -> Result<NewExercise> {
        let description = require_text("description", self.description.as_deref())?;
        let duration = require_positive_integer("duration", self.duration.as_ref())?;
        let date = optional_date("date", self.date.as_deref())?.unwrap_or(today);

        Ok(NewExercise {
            description,
            duration,
            date,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub id: String,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl ExerciseResponse {
    pub fn new(user: &User, exercise: &Exercise) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            description: exercise.description.clone(),
            duration: exercise.duration,
            date: format_date(exercise.date),
        }
    }
}

/// Raw `/logs` query string.
#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Validated log filter. Both date bounds are inclusive whole days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<i64>,
}

impl TryFrom<&LogParams> for LogQuery {
    type Error = crate::error::AppError;

    fn try_from(params: &LogParams) -> Result<Self> {
        Ok(Self {
            from: optional_date("from", params.from.as_deref())?,
            to: optional_date("to", params.to.as_deref())?,
            limit: optional_positive_integer("limit", params.limit.as_deref())?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: format_date(exercise.date),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogResponse {
    pub id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl LogResponse {
    pub fn new(user: User, exercises: Vec<Exercise>) -> Self {
        let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();
        Self {
            id: user.id,
            username: user.username,
            count: log.len(),
            log,
        }
    }
}
