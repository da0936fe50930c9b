use crate::{
    api::Groq,
    db::{chat::ChatLog, db::Db},
    libs::{
        config::{Config, API_KEY_ENV},
        error::GrindError,
        messages::Message,
        motivation::Motivator,
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct ChatArgs {
    #[command(subcommand)]
    command: Option<ChatCommand>,
    /// Message to send. Without one, an interactive session starts.
    message: Option<String>,
}

#[derive(Debug, Subcommand)]
enum ChatCommand {
    /// Show the whole conversation
    History,
    /// Delete the whole conversation
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(db: &Db, args: ChatArgs) -> Result<()> {
    match (args.command, args.message) {
        (Some(ChatCommand::History), _) => handle_history(db),
        (Some(ChatCommand::Clear { yes }), _) => handle_clear(db, yes),
        (None, Some(message)) => {
            let motivator = motivator()?;
            send(&motivator, &ChatLog::new(db), &message).await
        }
        (None, None) => handle_interactive(db).await,
    }
}

/// The chat is useless without a model, so a missing key stops here before
/// anything is logged.
fn motivator() -> Result<Motivator<Groq>> {
    let config = Config::read()?;
    let groq = Groq::from_env(&config.llm_or_default())?;
    if !groq.is_configured() {
        msg_bail_anyhow!(Message::ApiKeyMissing(API_KEY_ENV.to_string()));
    }
    Ok(Motivator::new(groq))
}

async fn send(motivator: &Motivator<Groq>, log: &ChatLog<'_>, input: &str) -> Result<()> {
    msg_info!(Message::ChatThinking);
    match motivator.chat_turn(log, input).await {
        Ok(reply) => msg_print!(format!("{}: {}", Message::ChatCoach, reply), true),
        Err(GrindError::Generation(e)) => msg_error!(Message::GenerationFailed(e.to_string())),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Reads messages until an empty line.
async fn handle_interactive(db: &Db) -> Result<()> {
    let motivator = motivator()?;
    let log = ChatLog::new(db);
    msg_print!(Message::ChatHeader, true);

    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptChatMessage.to_string())
            .allow_empty(true)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(());
        }
        send(&motivator, &log, &input).await?;
    }
}

fn handle_history(db: &Db) -> Result<()> {
    let history = ChatLog::new(db).history()?;

    if history.is_empty() {
        msg_info!(Message::ChatHistoryEmpty);
        return Ok(());
    }

    msg_print!(Message::ChatHeader, true);
    View::chat(&history);
    Ok(())
}

fn handle_clear(db: &Db, yes: bool) -> Result<()> {
    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearChat.to_string())
            .default(false)
            .interact()?;

    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let removed = ChatLog::new(db).clear()?;
    msg_success!(Message::ChatCleared(removed));
    Ok(())
}
