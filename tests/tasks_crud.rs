#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use productodo::db::tasks::TaskStore;
    use productodo::libs::error::TaskError;
    use productodo::libs::task::{NewTask, Priority, StatusFilter, TaskFilter, TaskUpdate};
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
        store: TaskStore,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("tasks.db");
            let store = TaskStore::open(&db_path).unwrap();
            TaskTestContext {
                _temp_dir: temp_dir,
                db_path,
                store,
            }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_then_list(ctx: &mut TaskTestContext) {
        let created = ctx
            .store
            .create(
                NewTask::new("Read a chapter of a book")
                    .description("Chapter 4")
                    .priority(Priority::High)
                    .due_date(date(2025, 3, 1)),
            )
            .unwrap();

        let tasks = ctx.store.list(&TaskFilter::default()).unwrap();
        assert_eq!(tasks.len(), 1);

        let task = &tasks[0];
        assert_eq!(task, &created);
        assert_eq!(task.title, "Read a chapter of a book");
        assert_eq!(task.description.as_deref(), Some("Chapter 4"));
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.due_date, Some(date(2025, 3, 1)));
        assert!(!task.completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_defaults(ctx: &mut TaskTestContext) {
        let task = ctx.store.create(NewTask::new("Call mom").description("   ")).unwrap();

        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.description, None);
        assert_eq!(task.due_date, None);
        assert_eq!(ctx.store.get(task.id).unwrap(), task);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_rejects_empty_title(ctx: &mut TaskTestContext) {
        let err = ctx.store.create(NewTask::new("   ")).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        assert!(ctx.store.list(&TaskFilter::default()).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_are_not_reused(ctx: &mut TaskTestContext) {
        let first = ctx.store.create(NewTask::new("First")).unwrap();
        let second = ctx.store.create(NewTask::new("Second")).unwrap();
        ctx.store.delete(second.id).unwrap();
        ctx.store.delete(first.id).unwrap();

        let third = ctx.store.create(NewTask::new("Third")).unwrap();
        assert!(third.id > second.id);
        assert_ne!(third.id, first.id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_survive_reopen(ctx: &mut TaskTestContext) {
        let task = ctx.store.create(NewTask::new("Persisted")).unwrap();
        ctx.store.delete(task.id).unwrap();

        let mut reopened = TaskStore::open(&ctx.db_path).unwrap();
        let next = reopened.create(NewTask::new("After reopen")).unwrap();
        assert!(next.id > task.id);
        assert_eq!(reopened.list(&TaskFilter::default()).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_partial_update(ctx: &mut TaskTestContext) {
        let task = ctx
            .store
            .create(NewTask::new("Original").description("keep me").due_date(date(2025, 1, 15)))
            .unwrap();

        ctx.store
            .update(task.id, TaskUpdate::default().title("Renamed").priority(Priority::Low))
            .unwrap();

        let updated = ctx.store.get(task.id).unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.priority, Priority::Low);
        assert_eq!(updated.description.as_deref(), Some("keep me"));
        assert_eq!(updated.due_date, Some(date(2025, 1, 15)));
        assert_eq!(updated.created_at, task.created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_clears_optional_fields(ctx: &mut TaskTestContext) {
        let task = ctx
            .store
            .create(NewTask::new("Dentist").description("bring card").due_date(date(2025, 2, 2)))
            .unwrap();

        ctx.store
            .update(task.id, TaskUpdate::default().description(None).due_date(None))
            .unwrap();

        let updated = ctx.store.get(task.id).unwrap();
        assert_eq!(updated.description, None);
        assert_eq!(updated.due_date, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_rejects_empty_title(ctx: &mut TaskTestContext) {
        let task = ctx.store.create(NewTask::new("Keep title")).unwrap();

        let err = ctx.store.update(task.id, TaskUpdate::default().title("")).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(ctx.store.get(task.id).unwrap().title, "Keep title");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_set_completed_moves_between_statuses(ctx: &mut TaskTestContext) {
        let task = ctx.store.create(NewTask::new("Finish report")).unwrap();
        let pending = TaskFilter::default().status(StatusFilter::Pending);
        let completed = TaskFilter::default().status(StatusFilter::Completed);

        ctx.store.set_completed(task.id, true).unwrap();
        assert_eq!(ctx.store.list(&completed).unwrap().iter().map(|t| t.id).collect::<Vec<_>>(), vec![task.id]);
        assert!(ctx.store.list(&pending).unwrap().is_empty());

        ctx.store.set_completed(task.id, false).unwrap();
        assert!(ctx.store.list(&completed).unwrap().is_empty());
        assert_eq!(ctx.store.list(&pending).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_completed_toggle_keeps_other_fields(ctx: &mut TaskTestContext) {
        let task = ctx
            .store
            .create(NewTask::new("Pay rent").priority(Priority::High).due_date(date(2025, 4, 1)))
            .unwrap();

        ctx.store.set_completed(task.id, true).unwrap();

        let done = ctx.store.get(task.id).unwrap();
        assert!(done.completed);
        assert_eq!(done.title, task.title);
        assert_eq!(done.priority, task.priority);
        assert_eq!(done.due_date, task.due_date);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_deleted_id_is_not_found_everywhere(ctx: &mut TaskTestContext) {
        let task = ctx.store.create(NewTask::new("Temporary")).unwrap();
        ctx.store.delete(task.id).unwrap();

        assert!(ctx.store.get(task.id).unwrap_err().is_not_found());
        assert!(ctx.store.update(task.id, TaskUpdate::default().title("x")).unwrap_err().is_not_found());
        assert!(ctx.store.update(task.id, TaskUpdate::default()).unwrap_err().is_not_found());
        assert!(ctx.store.set_completed(task.id, true).unwrap_err().is_not_found());
        assert!(matches!(ctx.store.delete(task.id), Err(TaskError::NotFound(id)) if id == task.id));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_unknown_id_is_not_found(ctx: &mut TaskTestContext) {
        assert!(ctx.store.delete(999).unwrap_err().is_not_found());
        assert!(ctx.store.set_completed(999, true).unwrap_err().is_not_found());
    }
}
