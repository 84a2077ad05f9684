use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::TaskError;
use anyhow::Result;
use rusqlite::Connection;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DB_FILE_NAME: &str = "productodo.db";

/// Environment variable that overrides the database location.
pub const DB_PATH_ENV: &str = "PRODUCTODO_DB";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the application database, applying pending migrations.
    ///
    /// The file is taken from `PRODUCTODO_DB`, then the configured
    /// `database_path`, then the platform data directory.
    pub fn new() -> Result<Db> {
        let path = Self::resolve_path()?;
        Ok(Self::open(path)?)
    }

    pub fn resolve_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        if let Some(path) = Config::read()?.database_path {
            return Ok(path);
        }
        DataStorage::new().get_path(DB_FILE_NAME)
    }

    /// Opens (creating if absent) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db, TaskError> {
        debug!(path = %path.as_ref().display(), "opening database");
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    pub fn in_memory() -> Result<Db, TaskError> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Opens a connection without touching the schema. Used by the
    /// migration tooling to inspect the current version.
    pub fn open_without_migrations<P: AsRef<Path>>(path: P) -> Result<Connection, TaskError> {
        Ok(Connection::open(path)?)
    }
}
