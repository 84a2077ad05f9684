#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64, String), // id, title
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskCompleted(i64),
    TaskReopened(i64),
    TaskNotFound(i64),
    TaskDeleteCancelled,
    TasksPendingHeader,
    TasksCompletedHeader,
    NoPendingTasks,
    NoCompletedTasks,
    EditingTask(String),
    NoChangesDetected,
    ConfirmDeleteTask(String),

    // === VALIDATION MESSAGES ===
    TitleRequired,
    TitleTooLong(usize), // max length
    InvalidPriority(String),
    InvalidDate(String),

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskPriority,
    PromptTaskDueDate,
    PromptDefaultPriority,
    PromptDateFormat,
    PromptDatabasePath,
    PromptExportDir,

    // === METRICS MESSAGES ===
    MetricsHeader,

    // === EXPORT MESSAGES ===
    ExportingData(String), // format
    ExportCompleted(usize, String), // rows, path

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String),

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),
    DatabaseVersion(u32),
    DatabaseNeedsUpdate,
    DatabaseUpToDate,
    MigrationHistory,
    MigrationsFound(usize),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
}
