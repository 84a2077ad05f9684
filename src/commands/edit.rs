//! Field edits for an existing task.
//!
//! With any field flag the listed fields are changed directly. Without flags
//! an interactive form opens, prefilled with the task's current values.

use crate::{
    db::tasks::TaskStore,
    libs::{
        formatter::{parse_date, parse_optional_date},
        messages::Message,
        task::{Priority, Task, TaskUpdate},
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: i64,

    #[arg(short, long)]
    title: Option<String>,

    #[arg(short, long, conflicts_with = "clear_description")]
    description: Option<String>,

    #[arg(long)]
    clear_description: bool,

    #[arg(short, long, value_enum)]
    priority: Option<Priority>,

    #[arg(long, conflicts_with = "clear_due", help = "Due date (YYYY-MM-DD, 'today' or 'tomorrow')")]
    due: Option<String>,

    #[arg(long)]
    clear_due: bool,
}

impl EditArgs {
    fn has_field_flags(&self) -> bool {
        self.title.is_some() || self.description.is_some() || self.clear_description || self.priority.is_some() || self.due.is_some() || self.clear_due
    }

    fn into_update(self) -> Result<TaskUpdate> {
        let mut update = TaskUpdate::default();
        if let Some(title) = self.title {
            update = update.title(title);
        }
        if self.clear_description {
            update = update.description(None);
        } else if let Some(description) = self.description {
            update = update.description(Some(description));
        }
        if let Some(priority) = self.priority {
            update = update.priority(priority);
        }
        if self.clear_due {
            update = update.due_date(None);
        } else if let Some(due) = self.due {
            update = update.due_date(Some(parse_date(&due)?));
        }
        Ok(update)
    }
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut store = TaskStore::new()?;
    let id = args.id;

    let update = if args.has_field_flags() {
        args.into_update()?
    } else {
        let task = store.get(id)?;
        prompt_update(&task)?.diff(&task)
    };

    if update.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    store.update(id, update)?;

    msg_success!(Message::TaskUpdated(id));
    Ok(())
}

fn prompt_update(task: &Task) -> Result<TaskUpdate> {
    let theme = ColorfulTheme::default();
    msg_print!(Message::EditingTask(task.title.clone()), true);

    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskTitle.to_string())
        .default(task.title.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(task.description.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let priority_names: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();
    let current_priority = Priority::ALL.iter().position(|p| *p == task.priority).unwrap_or(1);
    let priority_index = Select::with_theme(&theme)
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&priority_names)
        .default(current_priority)
        .interact()?;

    let due_date: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(task.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default())
        .allow_empty(true)
        .validate_with(|input: &String| parse_optional_date(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact_text()?;

    Ok(TaskUpdate::default()
        .title(title)
        .description(Some(description))
        .priority(Priority::ALL[priority_index])
        .due_date(parse_optional_date(&due_date)?))
}
