//! Display implementation for application messages.
//!
//! All user-facing text lives here, keyed by the `Message` variants in
//! [`super::types`]. Callers never format message text themselves; they pick
//! a variant and hand it to one of the `msg_*!` macros.
//!
//! ```rust
//! use productodo::libs::messages::Message;
//!
//! assert_eq!(Message::TaskDeleted(3).to_string(), "Task #3 deleted");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, title) => format!("Task #{} '{}' added", id, title),
            Message::TaskUpdated(id) => format!("Task #{} updated", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskCompleted(id) => format!("Task #{} marked as completed", id),
            Message::TaskReopened(id) => format!("Task #{} moved back to pending", id),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TaskDeleteCancelled => "Deletion cancelled".to_string(),
            Message::TasksPendingHeader => "Pending Tasks".to_string(),
            Message::TasksCompletedHeader => "Completed Tasks".to_string(),
            Message::NoPendingTasks => "No pending tasks! You're all caught up.".to_string(),
            Message::NoCompletedTasks => "No tasks completed yet.".to_string(),
            Message::EditingTask(title) => format!("Editing task: '{}'", title),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'? This cannot be undone", title),

            // === VALIDATION MESSAGES ===
            Message::TitleRequired => "Task title is required".to_string(),
            Message::TitleTooLong(max) => format!("Task title must be at most {} characters", max),
            Message::InvalidPriority(value) => format!("Invalid priority '{}': expected High, Medium or Low", value),
            Message::InvalidDate(value) => format!("Invalid date '{}': expected YYYY-MM-DD, 'today' or 'tomorrow'", value),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD, empty for none)".to_string(),
            Message::PromptDefaultPriority => "Default priority for new tasks".to_string(),
            Message::PromptDateFormat => "Date display format (strftime)".to_string(),
            Message::PromptDatabasePath => "Database file path (empty for default)".to_string(),
            Message::PromptExportDir => "Export directory (empty for current directory)".to_string(),

            // === METRICS MESSAGES ===
            Message::MetricsHeader => "Productivity Dashboard".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(format) => format!("Exporting tasks as {}...", format),
            Message::ExportCompleted(rows, path) => format!("Exported {} task(s) to {}", rows, path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError(err) => format!("Failed to parse configuration: {}", err),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Using database {}", path),
            Message::DatabaseVersion(version) => format!("Database schema version: {}", version),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, err) => format!("Migration v{} failed: {}", version, err),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
        };
        write!(f, "{}", text)
    }
}
