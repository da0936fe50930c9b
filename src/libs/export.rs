//! Export of a task listing to CSV, JSON or Excel.
//!
//! Every format carries the same columns in the same order:
//!
//! | column       | content                         |
//! |--------------|---------------------------------|
//! | `id`         | task id                         |
//! | `name`       | task name                       |
//! | `due_at`     | `YYYY-MM-DD HH:MM`              |
//! | `status`     | `pending` / `completed`         |
//! | `priority`   | `Low` / `Medium` / `High`       |
//! | `category`   | category name                   |
//! | `notes`      | free text, empty when absent    |
//! | `created_at` | `YYYY-MM-DD HH:MM:SS`           |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use grind::libs::export::{ExportFormat, Exporter};
//!
//! # fn run(tasks: &[grind::libs::task::Task]) -> grind::libs::error::Result<()> {
//! let path = Exporter::new(ExportFormat::Csv, None).export(tasks)?;
//! println!("{}", path.display());
//! # Ok(())
//! # }
//! ```

use crate::libs::error::Result;
use crate::libs::formatter::{format_due, format_timestamp};
use crate::libs::task::Task;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

const COLUMNS: [&str; 8] = ["id", "name", "due_at", "status", "priority", "category", "notes", "created_at"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
            ExportFormat::Excel => "Excel",
        })
    }
}

/// One exported row. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTask {
    pub id: i64,
    pub name: String,
    pub due_at: String,
    pub status: String,
    pub priority: String,
    pub category: String,
    pub notes: String,
    pub created_at: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            id: task.id,
            name: task.name.clone(),
            due_at: format_due(&task.due_at),
            status: task.status.to_string(),
            priority: task.priority.to_string(),
            category: task.category.clone(),
            notes: task.notes.clone().unwrap_or_default(),
            created_at: format_timestamp(&task.created_at),
        }
    }
}

/// Reads back a JSON export.
pub fn parse_json(json: &str) -> Result<Vec<ExportTask>> {
    Ok(serde_json::from_str(json)?)
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is written to the working directory
    /// as `grind_tasks_<YYYYMMDD_HHMMSS>.<ext>`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!("grind_tasks_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), format.extension()))
        });
        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `tasks` in listing order and returns the file path.
    pub fn export(&self, tasks: &[Task]) -> Result<PathBuf> {
        let rows: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();

        match self.format {
            ExportFormat::Csv => self.export_csv(&rows)?,
            ExportFormat::Json => self.export_json(&rows)?,
            ExportFormat::Excel => self.export_excel(&rows)?,
        }

        tracing::debug!(rows = rows.len(), path = %self.output_path.display(), format = %self.format, "tasks exported");
        Ok(self.output_path.clone())
    }

    fn export_csv(&self, rows: &[ExportTask]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        if rows.is_empty() {
            wtr.write_record(COLUMNS)?;
        }
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, rows: &[ExportTask]) -> Result<()> {
        let file = BufWriter::new(File::create(&self.output_path)?);
        serde_json::to_writer_pretty(file, rows)?;
        Ok(())
    }

    fn export_excel(&self, rows: &[ExportTask]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Tasks")?;

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        for (col, title) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (i, task) in rows.iter().enumerate() {
            let row = i as u32 + 1;
            worksheet.write_number(row, 0, task.id as f64)?;
            worksheet.write_string(row, 1, &task.name)?;
            worksheet.write_string(row, 2, &task.due_at)?;
            worksheet.write_string(row, 3, &task.status)?;
            worksheet.write_string(row, 4, &task.priority)?;
            worksheet.write_string(row, 5, &task.category)?;
            worksheet.write_string(row, 6, &task.notes)?;
            worksheet.write_string(row, 7, &task.created_at)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
