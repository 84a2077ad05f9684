#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use productodo::db::tasks::TaskStore;
    use productodo::libs::task::{NewTask, Priority, StatusFilter, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FilterTestContext {
        _temp_dir: TempDir,
        store: TaskStore,
    }

    impl TestContext for FilterTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = TaskStore::open(temp_dir.path().join("tasks.db")).unwrap();
            FilterTestContext { _temp_dir: temp_dir, store }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn titles(store: &TaskStore, filter: &TaskFilter) -> Vec<String> {
        store.list(filter).unwrap().into_iter().map(|t| t.title).collect()
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_sorted_by_due_date_with_undated_last(ctx: &mut FilterTestContext) {
        ctx.store.create(NewTask::new("Undated")).unwrap();
        ctx.store.create(NewTask::new("March").due_date(date(2025, 3, 1))).unwrap();
        ctx.store.create(NewTask::new("January").due_date(date(2025, 1, 15))).unwrap();

        let tasks = ctx.store.list(&TaskFilter::default()).unwrap();
        let due: Vec<Option<NaiveDate>> = tasks.iter().map(|t| t.due_date).collect();
        assert_eq!(due, vec![Some(date(2025, 1, 15)), Some(date(2025, 3, 1)), None]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_equal_due_dates_keep_creation_order(ctx: &mut FilterTestContext) {
        ctx.store.create(NewTask::new("B later")).unwrap();
        ctx.store.create(NewTask::new("A first").due_date(date(2025, 5, 5))).unwrap();
        ctx.store.create(NewTask::new("C second").due_date(date(2025, 5, 5))).unwrap();
        ctx.store.create(NewTask::new("D undated")).unwrap();

        assert_eq!(titles(&ctx.store, &TaskFilter::default()), vec!["A first", "C second", "B later", "D undated"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_search_is_case_insensitive(ctx: &mut FilterTestContext) {
        ctx.store.create(NewTask::new("Buy Milk")).unwrap();
        ctx.store.create(NewTask::new("Walk the dog")).unwrap();

        assert_eq!(titles(&ctx.store, &TaskFilter::default().search("milk")), vec!["Buy Milk"]);
        assert_eq!(titles(&ctx.store, &TaskFilter::default().search("MILK")), vec!["Buy Milk"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_search_matches_description(ctx: &mut FilterTestContext) {
        ctx.store.create(NewTask::new("Groceries").description("eggs, bread and milk")).unwrap();
        ctx.store.create(NewTask::new("Gym")).unwrap();

        assert_eq!(titles(&ctx.store, &TaskFilter::default().search("Bread")), vec!["Groceries"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_search_treats_wildcards_literally(ctx: &mut FilterTestContext) {
        ctx.store.create(NewTask::new("Raise price by 10%")).unwrap();
        ctx.store.create(NewTask::new("Rename file_name")).unwrap();
        ctx.store.create(NewTask::new("Plain task")).unwrap();

        assert_eq!(titles(&ctx.store, &TaskFilter::default().search("%")), vec!["Raise price by 10%"]);
        assert_eq!(titles(&ctx.store, &TaskFilter::default().search("_")), vec!["Rename file_name"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_blank_search_matches_everything(ctx: &mut FilterTestContext) {
        ctx.store.create(NewTask::new("One")).unwrap();
        ctx.store.create(NewTask::new("Two")).unwrap();

        assert_eq!(ctx.store.list(&TaskFilter::default().search("   ")).unwrap().len(), 2);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_priority_filter(ctx: &mut FilterTestContext) {
        ctx.store.create(NewTask::new("Urgent").priority(Priority::High)).unwrap();
        ctx.store.create(NewTask::new("Someday").priority(Priority::Low)).unwrap();
        ctx.store.create(NewTask::new("Normal")).unwrap();

        assert_eq!(titles(&ctx.store, &TaskFilter::default().priority(Priority::High)), vec!["Urgent"]);
        assert_eq!(titles(&ctx.store, &TaskFilter::default().priority(Priority::Medium)), vec!["Normal"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_filters_combine(ctx: &mut FilterTestContext) {
        let done = ctx.store.create(NewTask::new("Report draft").priority(Priority::High)).unwrap();
        ctx.store.create(NewTask::new("Report review").priority(Priority::High)).unwrap();
        ctx.store.create(NewTask::new("Report archive").priority(Priority::Low)).unwrap();
        ctx.store.set_completed(done.id, true).unwrap();

        let filter = TaskFilter::default()
            .status(StatusFilter::Pending)
            .priority(Priority::High)
            .search("report");
        assert_eq!(titles(&ctx.store, &filter), vec!["Report review"]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_list_reflects_later_changes(ctx: &mut FilterTestContext) {
        let filter = TaskFilter::default().status(StatusFilter::Pending);
        ctx.store.create(NewTask::new("First")).unwrap();
        assert_eq!(ctx.store.list(&filter).unwrap().len(), 1);

        ctx.store.create(NewTask::new("Second")).unwrap();
        assert_eq!(ctx.store.list(&filter).unwrap().len(), 2);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_scan_visits_in_list_order(ctx: &mut FilterTestContext) {
        ctx.store.create(NewTask::new("Later")).unwrap();
        ctx.store.create(NewTask::new("Sooner").due_date(date(2025, 1, 1))).unwrap();

        let mut seen = Vec::new();
        let visited = ctx
            .store
            .scan(&TaskFilter::default(), |task| -> anyhow::Result<()> {
                seen.push(task.title);
                Ok(())
            })
            .unwrap();

        assert_eq!(visited, 2);
        assert_eq!(seen, titles(&ctx.store, &TaskFilter::default()));
    }
}
