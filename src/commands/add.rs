use crate::{
    db::tasks::TaskStore,
    libs::{config::Config, formatter::parse_date, messages::Message, task::{NewTask, Priority}},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,

    #[arg(short, long, help = "Optional details")]
    description: Option<String>,

    #[arg(short, long, value_enum, help = "Defaults to the configured priority")]
    priority: Option<Priority>,

    #[arg(long, help = "Due date (YYYY-MM-DD, 'today' or 'tomorrow')")]
    due: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let priority = match args.priority {
        Some(priority) => priority,
        None => Config::read()?.default_priority,
    };

    let mut new_task = NewTask::new(args.title).priority(priority);
    if let Some(description) = args.description {
        new_task = new_task.description(description);
    }
    if let Some(due) = args.due {
        new_task = new_task.due_date(parse_date(&due)?);
    }

    let task = TaskStore::new()?.create(new_task)?;

    msg_success!(Message::TaskCreated(task.id, task.title));
    Ok(())
}
