use super::db::Db;
use crate::libs::error::TaskError;
use crate::libs::task::{normalize_description, validate_title, Metrics, NewTask, StatusFilter, Task, TaskFilter, TaskUpdate};
use chrono::Local;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

/// Column order expected by `Task::from_row`.
pub(crate) const TASK_COLUMNS: &str = "id, title, description, priority, due_date, completed, created_at";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, priority, due_date, completed, created_at) VALUES (?1, ?2, ?3, ?4, 0, ?5)";
const UPDATE_COMPLETED: &str = "UPDATE tasks SET completed = ?1 WHERE id = ?2";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const TASK_EXISTS: &str = "SELECT 1 FROM tasks WHERE id = ?1";
const SELECT_METRICS: &str = "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM tasks";
// Undated tasks sort last; ties fall back to creation order.
const ORDER_TASKS: &str = "ORDER BY due_date IS NULL, due_date ASC, id ASC";

/// Persistent task collection backed by one SQLite connection.
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Opens the application database resolved by [`Db::new`].
    pub fn new() -> anyhow::Result<TaskStore> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<TaskStore, TaskError> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn in_memory() -> Result<TaskStore, TaskError> {
        Ok(Self::from_db(Db::in_memory()?))
    }

    pub fn from_db(db: Db) -> TaskStore {
        TaskStore { conn: db.conn }
    }

    pub fn create(&mut self, task: NewTask) -> Result<Task, TaskError> {
        let title = validate_title(&task.title)?;
        let description = normalize_description(task.description);
        let created_at = Local::now().naive_local();

        self.conn
            .execute(INSERT_TASK, params![title, description, task.priority, task.due_date, created_at])?;
        let id = self.conn.last_insert_rowid();
        debug!(id, "task created");

        // Read back so the returned task carries the stored timestamp precision.
        self.get(id)
    }

    pub fn get(&self, id: i64) -> Result<Task, TaskError> {
        let sql = format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS);
        self.conn
            .query_row(&sql, params![id], Task::from_row)
            .optional()?
            .ok_or(TaskError::NotFound(id))
    }

    /// Applies the fields present in `update` to task `id`.
    pub fn update(&mut self, id: i64, update: TaskUpdate) -> Result<(), TaskError> {
        let mut assignments: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(title) = update.title {
            assignments.push("title = ?");
            values.push(Value::Text(validate_title(&title)?));
        }
        if let Some(description) = update.description {
            assignments.push("description = ?");
            values.push(normalize_description(description).map_or(Value::Null, Value::Text));
        }
        if let Some(priority) = update.priority {
            assignments.push("priority = ?");
            values.push(Value::Text(priority.as_str().to_string()));
        }
        if let Some(due_date) = update.due_date {
            assignments.push("due_date = ?");
            values.push(due_date.map_or(Value::Null, |d| Value::Text(d.format("%Y-%m-%d").to_string())));
        }
        if let Some(completed) = update.completed {
            assignments.push("completed = ?");
            values.push(Value::Integer(completed as i64));
        }

        if assignments.is_empty() {
            return self.ensure_exists(id);
        }

        let sql = format!("UPDATE tasks SET {} WHERE id = ?", assignments.join(", "));
        values.push(Value::Integer(id));

        let affected = self.conn.execute(&sql, params_from_iter(values.iter()))?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        debug!(id, fields = assignments.len(), "task updated");

        Ok(())
    }

    pub fn set_completed(&mut self, id: i64, completed: bool) -> Result<(), TaskError> {
        let affected = self.conn.execute(UPDATE_COMPLETED, params![completed, id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        debug!(id, completed, "task completion toggled");

        Ok(())
    }

    /// Permanently removes task `id`. Deleting a missing id is an error.
    pub fn delete(&mut self, id: i64) -> Result<(), TaskError> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        debug!(id, "task deleted");

        Ok(())
    }

    /// Tasks matching `filter`, by due date (undated last) then id.
    pub fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, TaskError> {
        let mut tasks = Vec::new();
        self.scan(filter, |task| {
            tasks.push(task);
            Ok::<(), TaskError>(())
        })?;

        Ok(tasks)
    }

    /// Streams the tasks matching `filter` to `visit`, one row at a time,
    /// in list order. Returns how many tasks were visited.
    ///
    /// Status and priority are pushed into the SQL query; the search text is
    /// matched on the decoded row so that case folding covers non-ASCII text.
    pub fn scan<E, F>(&self, filter: &TaskFilter, mut visit: F) -> Result<usize, E>
    where
        E: From<TaskError>,
        F: FnMut(Task) -> Result<(), E>,
    {
        let (sql, values) = build_list_query(filter);
        debug!(%sql, "listing tasks");

        let mut stmt = self.conn.prepare(&sql).map_err(TaskError::from)?;
        let mut rows = stmt.query(params_from_iter(values.iter())).map_err(TaskError::from)?;

        let mut visited = 0;
        while let Some(row) = rows.next().map_err(TaskError::from)? {
            let task = Task::from_row(row).map_err(TaskError::from)?;
            if !filter.matches_search(&task) {
                continue;
            }
            visit(task)?;
            visited += 1;
        }

        Ok(visited)
    }

    /// Completion counts over every task, regardless of any filter.
    pub fn metrics(&self) -> Result<Metrics, TaskError> {
        let (total, completed): (i64, i64) = self.conn.query_row(SELECT_METRICS, [], |row| Ok((row.get(0)?, row.get(1)?)))?;

        Ok(Metrics {
            total: total as usize,
            completed: completed as usize,
            pending: (total - completed) as usize,
        })
    }

    fn ensure_exists(&self, id: i64) -> Result<(), TaskError> {
        self.conn
            .query_row(TASK_EXISTS, params![id], |_| Ok(()))
            .optional()?
            .ok_or(TaskError::NotFound(id))
    }
}

fn build_list_query(filter: &TaskFilter) -> (String, Vec<Value>) {
    let mut conditions: Vec<&str> = Vec::new();
    let mut values: Vec<Value> = Vec::new();

    match filter.status {
        StatusFilter::All => {}
        StatusFilter::Pending => conditions.push("completed = 0"),
        StatusFilter::Completed => conditions.push("completed = 1"),
    }
    if let Some(priority) = filter.priority {
        conditions.push("priority = ?");
        values.push(Value::Text(priority.as_str().to_string()));
    }

    let mut sql = format!("SELECT {} FROM tasks", TASK_COLUMNS);
    if !conditions.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&conditions.join(" AND "));
    }
    sql.push(' ');
    sql.push_str(ORDER_TASKS);

    (sql, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::Priority;

    #[test]
    fn test_build_list_query_all() {
        let (sql, values) = build_list_query(&TaskFilter::default());
        assert_eq!(sql, format!("SELECT {} FROM tasks {}", TASK_COLUMNS, ORDER_TASKS));
        assert!(values.is_empty());
    }

    #[test]
    fn test_build_list_query_status_and_priority() {
        let filter = TaskFilter::default().status(StatusFilter::Completed).priority(Priority::High);
        let (sql, values) = build_list_query(&filter);
        assert!(sql.contains("WHERE completed = 1 AND priority = ?"));
        assert_eq!(values, vec![Value::Text("High".to_string())]);
    }

    #[test]
    fn test_search_does_not_reach_sql() {
        let (sql, values) = build_list_query(&TaskFilter::default().search("50%_off"));
        assert!(!sql.contains("LIKE"));
        assert!(values.is_empty());
    }

    #[test]
    fn test_update_with_no_fields_checks_existence() {
        let mut store = TaskStore::in_memory().unwrap();
        assert!(store.update(1, TaskUpdate::default()).unwrap_err().is_not_found());

        let task = store.create(NewTask::new("Water plants")).unwrap();
        store.update(task.id, TaskUpdate::default()).unwrap();
    }
}
