use crate::{
    db::{categories::Categories, db::Db},
    libs::{error::GrindError, messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: Option<CategoryCommand>,
}

#[derive(Debug, Subcommand)]
enum CategoryCommand {
    /// Add a category; adding an existing one is a no-op
    Add { name: Option<String> },
    /// List all categories
    List,
}

pub fn cmd(db: &Db, args: CategoryArgs) -> Result<()> {
    match args.command {
        Some(CategoryCommand::Add { name }) => handle_add(db, name),
        Some(CategoryCommand::List) | None => handle_list(db),
    }
}

fn handle_add(db: &Db, name: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCategoryName.to_string())
            .interact_text()?,
    };

    match Categories::new(db).create(&name) {
        Ok(true) => msg_success!(Message::CategoryCreated(name)),
        Ok(false) => msg_info!(Message::CategoryAlreadyExists(name)),
        Err(GrindError::Validation(_)) => msg_error!(Message::CategoryNameRequired),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn handle_list(db: &Db) -> Result<()> {
    let categories = Categories::new(db).list()?;

    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    msg_print!(Message::CategoriesHeader, true);
    View::categories(&categories);
    Ok(())
}
