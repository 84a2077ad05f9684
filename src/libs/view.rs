use super::formatter::{format_due_date, format_rate};
use super::task::{Metrics, Task};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], date_format: &str) {
        Self::tasks_table(tasks, date_format).printstd();
    }

    pub fn tasks_table(tasks: &[Task], date_format: &str) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "PRIORITY", "DUE DATE", "DONE"]);
        for task in tasks {
            let done = if task.completed { "✔" } else { "" };
            table.add_row(row![
                task.id,
                task.title,
                task.description.as_deref().unwrap_or(""),
                task.priority,
                format_due_date(task.due_date, date_format),
                done
            ]);
        }

        table
    }

    pub fn metrics(metrics: &Metrics) {
        let mut table = Table::new();

        table.add_row(row!["TOTAL TASKS", "COMPLETED", "PENDING", "COMPLETION RATE"]);
        table.add_row(row![
            metrics.total,
            metrics.completed,
            metrics.pending,
            format_rate(metrics.completion_rate())
        ]);
        table.printstd();
    }
}
