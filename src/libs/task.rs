//! Task entity and the value types used to create, change and query tasks.
//!
//! ```rust
//! use productodo::libs::task::{NewTask, Priority, StatusFilter, TaskFilter};
//!
//! let task = NewTask::new("Buy milk").priority(Priority::High);
//! let filter = TaskFilter::default().status(StatusFilter::Pending).search("milk");
//! # let _ = (task, filter);
//! ```

use super::error::TaskError;
use super::messages::Message;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::Row;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest accepted title, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Store-generated, never reused
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    /// Local time of creation
    pub created_at: NaiveDateTime,
}

impl Task {
    /// Maps a row selected with [`crate::db::tasks::TASK_COLUMNS`].
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            priority: row.get(3)?,
            due_date: row.get(4)?,
            completed: row.get(5)?,
            created_at: row.get(6)?,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(TaskError::Validation(Message::InvalidPriority(s.to_string()))),
        }
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: TaskError| FromSqlError::Other(Box::new(e)))
    }
}

/// Completion status constraint of a list query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

/// Status, priority and search-text constraints for a list query.
///
/// The default filter matches every task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub status: StatusFilter,
    /// `None` means any priority
    pub priority: Option<Priority>,
    pub search: Option<String>,
}

impl TaskFilter {
    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Lowercased search needle, `None` when absent or blank.
    pub fn needle(&self) -> Option<String> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()).map(str::to_lowercase)
    }

    /// Case-insensitive substring match against title and description.
    pub fn matches_search(&self, task: &Task) -> bool {
        match self.needle() {
            None => true,
            Some(needle) => {
                task.title.to_lowercase().contains(&needle)
                    || task.description.as_deref().is_some_and(|d| d.to_lowercase().contains(&needle))
            }
        }
    }
}

/// Payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Partial change set for an existing task. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub priority: Option<Priority>,
    /// `Some(None)` clears the due date
    pub due_date: Option<Option<NaiveDate>>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.priority.is_none() && self.due_date.is_none() && self.completed.is_none()
    }

    /// Drops the fields that already hold the same value in `task`.
    pub fn diff(self, task: &Task) -> Self {
        Self {
            title: self.title.filter(|t| t.trim() != task.title),
            description: self.description.map(normalize_description).filter(|d| *d != task.description),
            priority: self.priority.filter(|p| *p != task.priority),
            due_date: self.due_date.filter(|d| *d != task.due_date),
            completed: self.completed.filter(|c| *c != task.completed),
        }
    }
}

/// Trims a title and checks it is present and not too long.
pub fn validate_title(title: &str) -> Result<String, TaskError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(TaskError::Validation(Message::TitleRequired));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(TaskError::Validation(Message::TitleTooLong(TITLE_MAX_CHARS)));
    }
    Ok(title.to_string())
}

/// Blank descriptions are stored as NULL.
pub fn normalize_description(description: Option<String>) -> Option<String> {
    description.map(|d| d.trim().to_string()).filter(|d| !d.is_empty())
}

/// Aggregate completion counts over the whole store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl Metrics {
    /// Completed share as a percentage, 0.0 for an empty store.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64 * 100.0
        }
    }
}
