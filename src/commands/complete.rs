use crate::{db::tasks::TaskStore, libs::messages::Message, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task ID
    id: i64,
}

/// Sets the completion flag of a task; `done` and `undo` differ only in
/// the value passed.
pub fn cmd(args: CompleteArgs, completed: bool) -> Result<()> {
    TaskStore::new()?.set_completed(args.id, completed)?;

    if completed {
        msg_success!(Message::TaskCompleted(args.id));
    } else {
        msg_success!(Message::TaskReopened(args.id));
    }
    Ok(())
}
