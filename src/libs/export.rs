//! Task list export to CSV and JSON.
//!
//! Both formats write the tasks returned by the same filtered list query the
//! console view uses. CSV rows are streamed straight from the database
//! cursor; JSON needs the whole array and collects first.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use productodo::db::tasks::TaskStore;
//! use productodo::libs::export::{ExportFormat, Exporter};
//! use productodo::libs::task::TaskFilter;
//!
//! let store = TaskStore::new()?;
//! let exporter = Exporter::new(ExportFormat::Csv, None, None);
//! let rows = exporter.export(&store, &TaskFilter::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::{db::tasks::TaskStore, libs::messages::Message, libs::task::TaskFilter, msg_success};
use anyhow::Result;
use chrono::Local;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// CSV header, one column per task attribute.
pub const CSV_HEADER: [&str; 7] = ["id", "title", "description", "priority", "due_date", "completed", "created_at"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON array
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Uses `output_path` when given; otherwise a timestamped file name
    /// (`productodo_export_20250115_143022.csv`) inside `export_dir`, or the
    /// current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, export_dir: Option<&Path>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            let file_name = format!("productodo_export_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), format.extension());
            match export_dir {
                Some(dir) => dir.join(file_name),
                None => PathBuf::from(file_name),
            }
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes the tasks matching `filter` to the output file and returns the
    /// number of task rows written.
    pub fn export(&self, store: &TaskStore, filter: &TaskFilter) -> Result<usize> {
        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(&self.output_path)?);

        let rows = match self.format {
            ExportFormat::Csv => write_csv(store, filter, &mut writer)?,
            ExportFormat::Json => write_json(store, filter, &mut writer)?,
        };
        writer.flush()?;

        msg_success!(Message::ExportCompleted(rows, self.output_path.display().to_string()));
        Ok(rows)
    }
}

/// Streams the filtered task list as CSV. The header is written even when no
/// task matches.
pub fn write_csv<W: Write>(store: &TaskStore, filter: &TaskFilter, writer: W) -> Result<usize> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    let rows = store.scan(filter, |task| -> Result<()> {
        wtr.serialize(&task)?;
        Ok(())
    })?;

    wtr.flush()?;
    Ok(rows)
}

pub fn write_json<W: Write>(store: &TaskStore, filter: &TaskFilter, writer: W) -> Result<usize> {
    let tasks = store.list(filter)?;
    serde_json::to_writer_pretty(writer, &tasks)?;
    Ok(tasks.len())
}
