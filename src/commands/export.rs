//! Writes the (optionally filtered) task list to a CSV or JSON file.

use super::list::FilterArgs;
use crate::{
    db::tasks::TaskStore,
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        task::TaskFilter,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file. Defaults to a timestamped name in the configured export directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let filter = TaskFilter::from(args.filter);

    msg_info!(Message::ExportingData(args.format.extension().to_uppercase()));

    let exporter = Exporter::new(args.format, args.output, config.export_dir.as_deref());
    exporter.export(&TaskStore::new()?, &filter)?;

    Ok(())
}
