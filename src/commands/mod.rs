//! Command-line interface for grind.
//!
//! Every subcommand except `init` runs against one [`Db`] opened here at
//! startup. The default category is seeded before any command runs, so task
//! creation always has a category to point at.

pub mod category;
pub mod chat;
pub mod export;
pub mod init;
pub mod stats;
pub mod task;

use crate::{
    db::{
        categories::{Categories, DEFAULT_CATEGORY},
        db::Db,
    },
    libs::messages::Message,
    msg_debug,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the completion API and storage")]
    Init(init::InitArgs),
    #[command(about = "Add or list categories")]
    Category(category::CategoryArgs),
    #[command(about = "Add, list and complete tasks")]
    Task(task::TaskArgs),
    #[command(about = "Show completion statistics")]
    Stats,
    #[command(about = "Talk to the coach")]
    Chat(chat::ChatArgs),
    #[command(about = "Export tasks to CSV, JSON or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Task tracker with a coach that does not accept excuses", long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            command => {
                let db = open_db()?;
                dispatch(&db, command).await
            }
        }
    }
}

fn open_db() -> Result<Db> {
    let db = Db::new()?;
    if Categories::new(&db).ensure_default_category()? {
        msg_debug!(Message::DefaultCategorySeeded(DEFAULT_CATEGORY.to_string()));
    }
    Ok(db)
}

async fn dispatch(db: &Db, command: Commands) -> Result<()> {
    match command {
        Commands::Category(args) => category::cmd(db, args),
        Commands::Task(args) => task::cmd(db, args).await,
        Commands::Stats => stats::cmd(db),
        Commands::Chat(args) => chat::cmd(db, args).await,
        Commands::Export(args) => export::cmd(db, args),
        Commands::Init(args) => init::cmd(args),
    }
}
