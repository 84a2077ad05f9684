//! SQLite persistence layer.
//!
//! [`db::Db`] opens the database file and brings its schema up to date via
//! [`migrations`]; [`tasks::TaskStore`] owns every query against the
//! `tasks` table.

/// Connection setup and database file resolution.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Task CRUD and the filtered list query.
pub mod tasks;
