use crate::{db::tasks::TaskStore, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: i64,

    #[arg(short, long, help = "Skip the confirmation prompt")]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut store = TaskStore::new()?;

    if !args.yes {
        let task = store.get(args.id)?;
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::TaskDeleteCancelled);
            return Ok(());
        }
    }

    store.delete(args.id)?;

    msg_success!(Message::TaskDeleted(args.id));
    Ok(())
}
