use super::task::FilterArgs;
use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
        task::TaskFilter,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to grind_tasks_<timestamp>.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    filter: FilterArgs,
}

pub fn cmd(db: &Db, args: ExportArgs) -> Result<()> {
    let filter: TaskFilter = args.filter.into();
    let tasks = Tasks::new(db).list(&filter)?;

    if tasks.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    msg_info!(Message::ExportingTasks(tasks.len(), args.format.to_string()));
    let path = Exporter::new(args.format, args.output).export(&tasks)?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
