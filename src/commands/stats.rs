use crate::{
    db::tasks::TaskStore,
    libs::{messages::Message, view::View},
    msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let metrics = TaskStore::new()?.metrics()?;

    msg_print!(Message::MetricsHeader, true);
    View::metrics(&metrics);
    Ok(())
}
