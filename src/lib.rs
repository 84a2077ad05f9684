//! # ProducTODO
//!
//! A personal task tracker that keeps its to-do list in a local SQLite file.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, complete and delete tasks with a
//!   priority and an optional due date
//! - **Queries**: Filter by status and priority, search title and
//!   description, sorted by due date
//! - **Metrics**: Total, completed and pending counts with a completion rate
//! - **Data Export**: CSV and JSON
//!
//! ## Usage
//!
//! ```rust
//! use productodo::db::tasks::TaskStore;
//! use productodo::libs::task::{NewTask, Priority, TaskFilter};
//!
//! let mut store = TaskStore::in_memory()?;
//! let task = store.create(NewTask::new("Read a chapter of a book").priority(Priority::High))?;
//! store.set_completed(task.id, true)?;
//! assert_eq!(store.list(&TaskFilter::default())?.len(), 1);
//! # Ok::<(), productodo::libs::error::TaskError>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
