//! Task list in two sections, pending then completed.

use crate::{
    db::tasks::TaskStore,
    libs::{
        config::Config,
        messages::Message,
        task::{Priority, StatusFilter, Task, TaskFilter},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

/// Filter options shared by `list` and `export`.
#[derive(Debug, Args)]
pub struct FilterArgs {
    #[arg(short, long, value_enum, default_value = "all", help = "Completion status to show")]
    status: StatusFilter,

    #[arg(short, long, value_enum, help = "Only tasks with this priority")]
    priority: Option<Priority>,

    #[arg(short = 'q', long, help = "Case-insensitive text to find in title or description")]
    search: Option<String>,
}

impl From<FilterArgs> for TaskFilter {
    fn from(args: FilterArgs) -> Self {
        TaskFilter {
            status: args.status,
            priority: args.priority,
            search: args.search,
        }
    }
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let filter = TaskFilter::from(args.filter);
    let tasks = TaskStore::new()?.list(&filter)?;

    let (completed, pending): (Vec<Task>, Vec<Task>) = tasks.into_iter().partition(|t| t.completed);

    if filter.status != StatusFilter::Completed {
        msg_print!(Message::TasksPendingHeader, true);
        if pending.is_empty() {
            msg_info!(Message::NoPendingTasks);
        } else {
            View::tasks(&pending, &config.date_format);
        }
    }

    if filter.status != StatusFilter::Pending {
        msg_print!(Message::TasksCompletedHeader, true);
        if completed.is_empty() {
            msg_info!(Message::NoCompletedTasks);
        } else {
            View::tasks(&completed, &config.date_format);
        }
    }

    Ok(())
}
