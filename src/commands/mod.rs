pub mod add;
pub mod complete;
pub mod delete;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod migrations;
pub mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "Show tasks, optionally filtered")]
    List(list::ListArgs),
    #[command(about = "Edit a task's fields")]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task as completed")]
    Done(complete::CompleteArgs),
    #[command(about = "Move a completed task back to pending")]
    Undo(complete::CompleteArgs),
    #[command(about = "Delete a task permanently")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show completion metrics")]
    Stats,
    #[command(about = "Export tasks to CSV or JSON")]
    Export(export::ExportArgs),
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Done(args) => complete::cmd(args, true),
            Commands::Undo(args) => complete::cmd(args, false),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Stats => stats::cmd(),
            Commands::Export(args) => export::cmd(args),
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
