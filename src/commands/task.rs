use crate::{
    api::Groq,
    db::{
        categories::{Categories, DEFAULT_CATEGORY},
        db::Db,
        tasks::Tasks,
    },
    libs::{
        config::{Config, API_KEY_ENV},
        error::GrindError,
        formatter::{format_due, parse_due},
        messages::Message,
        motivation::{Motivator, StatusUpdate},
        task::{NewTask, Priority, Task, TaskFilter, TaskId, TaskStatus, Tone},
        view::View,
    },
    msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Duration, Local};
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Add a task. Missing fields are prompted for when no name is given.
    Add {
        /// Task name; requires --due
        #[arg(requires = "due")]
        name: Option<String>,
        /// Due time, "YYYY-MM-DD HH:MM"
        #[arg(short, long)]
        due: Option<String>,
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List tasks, pending ones only unless --all is given
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Mark a task as completed
    Complete { id: Option<TaskId> },
    /// Set a task's status explicitly
    Status {
        id: TaskId,
        #[arg(value_enum)]
        status: TaskStatus,
    },
}

/// Listing filters shared by `task list` and `export`.
#[derive(Debug, Args, Default)]
pub struct FilterArgs {
    /// Include completed tasks
    #[arg(short, long)]
    all: bool,
    /// Only these categories (repeatable)
    #[arg(short = 'c', long = "category")]
    categories: Vec<String>,
    /// Only these priorities (repeatable)
    #[arg(short = 'p', long = "priority", value_enum)]
    priorities: Vec<Priority>,
}

impl From<FilterArgs> for TaskFilter {
    fn from(args: FilterArgs) -> Self {
        TaskFilter {
            include_completed: args.all,
            ..TaskFilter::default()
        }
        .with_categories(args.categories)
        .with_priorities(args.priorities)
    }
}

pub async fn cmd(db: &Db, args: TaskArgs) -> Result<()> {
    match args.command {
        Some(TaskCommand::Add {
            name,
            due,
            priority,
            category,
            notes,
        }) => handle_add(db, name, due, priority, category, notes),
        Some(TaskCommand::List { filter }) => handle_list(db, filter.into()),
        Some(TaskCommand::Complete { id }) => handle_complete(db, id).await,
        Some(TaskCommand::Status { id, status }) => update_status(db, id, status).await,
        None => handle_list(db, TaskFilter::pending()),
    }
}

fn handle_add(
    db: &Db,
    name: Option<String>,
    due: Option<String>,
    priority: Option<Priority>,
    category: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let interactive = name.is_none();
    let theme = ColorfulTheme::default();

    let name = match name {
        Some(name) => name,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptTaskName.to_string())
            .allow_empty(true)
            .interact_text()?,
    };
    if name.trim().is_empty() {
        msg_error!(Message::TaskNameRequired);
        return Ok(());
    }

    let due = match due {
        Some(due) => due,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptDueDate.to_string())
            .default(format_due(&(Local::now().naive_local() + Duration::hours(1))))
            .interact_text()?,
    };
    let Some(due_at) = parse_due(&due) else {
        msg_bail_anyhow!(Message::InvalidDueDate(due));
    };

    let priority = match priority {
        Some(priority) => priority,
        None if interactive => {
            let labels: Vec<String> = Priority::ALL.iter().map(|p| p.to_string()).collect();
            let default = Priority::ALL.iter().position(|p| *p == Priority::default()).unwrap_or(0);
            let index = Select::with_theme(&theme)
                .with_prompt(Message::PromptPriority.to_string())
                .items(&labels)
                .default(default)
                .interact()?;
            Priority::ALL[index]
        }
        None => Priority::default(),
    };

    let category = match category {
        Some(category) => category,
        None if interactive => {
            let names = Categories::new(db).names()?;
            if names.is_empty() {
                msg_bail_anyhow!(Message::NoCategoriesFound);
            }
            let index = Select::with_theme(&theme)
                .with_prompt(Message::PromptCategory.to_string())
                .items(&names)
                .default(0)
                .interact()?;
            names[index].clone()
        }
        None => DEFAULT_CATEGORY.to_string(),
    };

    let notes = match notes {
        Some(notes) => notes,
        None if interactive => Input::with_theme(&theme)
            .with_prompt(Message::PromptNotes.to_string())
            .allow_empty(true)
            .interact_text()?,
        None => String::new(),
    };

    let task = NewTask::new(&name, due_at, priority, &category).with_notes(&notes);
    match Tasks::new(db).create(&task) {
        Ok(id) => msg_success!(Message::TaskCreatedWithId(name.trim().to_string(), id)),
        Err(GrindError::InvalidCategory(category)) => msg_error!(Message::CategoryNotFound(category)),
        Err(GrindError::Validation(_)) => msg_error!(Message::TaskNameRequired),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn handle_list(db: &Db, filter: TaskFilter) -> Result<()> {
    let tasks = Tasks::new(db).list(&filter)?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks, Local::now().naive_local());
    Ok(())
}

async fn handle_complete(db: &Db, id: Option<TaskId>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => match select_pending_task(db)? {
            Some(id) => id,
            None => return Ok(()),
        },
    };
    update_status(db, id, TaskStatus::Completed).await
}

fn select_pending_task(db: &Db) -> Result<Option<TaskId>> {
    let pending = Tasks::new(db).list(&TaskFilter::pending())?;
    if pending.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(None);
    }

    let labels: Vec<String> = pending.iter().map(task_label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTaskToComplete.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;

    match selection {
        Some(index) => Ok(Some(pending[index].id)),
        None => {
            msg_info!(Message::OperationCancelled);
            Ok(None)
        }
    }
}

fn task_label(task: &Task) -> String {
    format!("#{} {} (due {})", task.id, task.name, format_due(&task.due_at))
}

/// Saves the status first, then asks the coach for a message. A failed
/// message is reported next to the saved status, never instead of it.
async fn update_status(db: &Db, id: TaskId, status: TaskStatus) -> Result<()> {
    let config = Config::read()?;
    let groq = Groq::from_env(&config.llm_or_default())?;
    let configured = groq.is_configured();
    let motivator = Motivator::new(groq);

    let update = match motivator.update_task_status(&Tasks::new(db), id, status).await {
        Ok(update) => update,
        Err(GrindError::NotFound { id, .. }) => {
            msg_error!(Message::TaskNotFound(id));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let StatusUpdate { change, message } = update;
    msg_success!(Message::TaskStatusUpdated(change.task.name.clone(), change.task.status));

    match message {
        Ok(text) => match change.tone() {
            Tone::Celebratory => msg_success!(text, true),
            Tone::Corrective => msg_warning!(text, true),
        },
        Err(_) if !configured => msg_warning!(Message::ApiKeyMissing(API_KEY_ENV.to_string())),
        Err(e) => msg_warning!(Message::StatusSavedButMessageFailed(e.to_string())),
    }
    Ok(())
}
