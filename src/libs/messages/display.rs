//! Display implementation for grind messages.
//!
//! All user-facing text is defined here so that wording stays consistent
//! across commands. The loud, all-caps lines are part of the product's
//! voice: the task manager is supposed to sound like a drill sergeant.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreatedWithId(name, id) => format!("TASK SET: '{}' (ID {}). NO EXCUSES NOW!", name, id),
            Message::TaskNameRequired => "TASK NAME IS REQUIRED! DON'T BE SOFT!".to_string(),
            Message::TaskNotFound(id) => format!("Task with ID {} not found.", id),
            Message::TaskStatusUpdated(name, status) => format!("Task '{}' marked as {}.", name, status),
            Message::TasksHeader => "YOUR BATTLE PLAN:".to_string(),
            Message::NoTasksFound => "NO TASKS FOUND WITH CURRENT FILTERS! TIME TO ADD SOME!".to_string(),
            Message::InvalidDueDate(value) => format!("Invalid due date '{}'. Use YYYY-MM-DD HH:MM.", value),

            // === CATEGORY MESSAGES ===
            Message::CategoryCreated(name) => format!("NEW CATEGORY '{}' ADDED! LET'S GO!", name),
            Message::CategoryAlreadyExists(name) => format!("Category '{}' already exists!", name),
            Message::CategoryNotFound(name) => format!("Category '{}' does not exist!", name),
            Message::CategoryNameRequired => "Category name must not be empty.".to_string(),
            Message::CategoriesHeader => "Categories:".to_string(),
            Message::NoCategoriesFound => "NO CATEGORIES FOUND! ADD A CATEGORY FIRST!".to_string(),
            Message::DefaultCategorySeeded(name) => format!("Created default category '{}'.", name),

            // === CHAT MESSAGES ===
            Message::ChatHeader => "CHAT LOG - NO WEAKNESS HERE!".to_string(),
            Message::ChatHistoryEmpty => "No conversation yet. Say something, warrior.".to_string(),
            Message::ChatCleared(count) => format!("Chat history cleared ({} message(s) removed).", count),
            Message::ChatThinking => "Coach is thinking...".to_string(),
            Message::ChatYou => "You".to_string(),
            Message::ChatCoach => "Coach".to_string(),

            // === GENERATION MESSAGES ===
            Message::GenerationFailed(error) => format!("Could not get a response from the coach: {}", error),
            Message::StatusSavedButMessageFailed(error) => {
                format!("Status saved, but the motivational message could not be generated: {}", error)
            }
            Message::ApiKeyMissing(var) => format!("API key is not set. Export {} or add it to a .env file.", var),
            Message::RetryingGeneration(attempt) => format!("Completion request failed, retrying (attempt {})", attempt),

            // === ANALYTICS MESSAGES ===
            Message::NoDataToAnalyze => "NO DATA TO ANALYZE YET! START ADDING TASKS, WARRIOR!".to_string(),
            Message::StatsOverviewHeader => "Overall Performance".to_string(),
            Message::StatsCategoryHeader => "Category Performance".to_string(),
            Message::StatsPriorityHeader => "Tasks by Priority".to_string(),
            Message::StatsDailyHeader => "Daily Task Creation".to_string(),
            Message::StatsWeekHeader => "Week-over-Week Comparison".to_string(),
            Message::VerdictCrushing => "CRUSHING IT! KEEP PUSHING!".to_string(),
            Message::VerdictProgressing => "GOOD PROGRESS! BUT YOU CAN DO BETTER!".to_string(),
            Message::VerdictSlacking => "TIME TO STEP IT UP! NO EXCUSES!".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingTasks(count, format) => format!("Exporting {} task(s) as {}...", count, format),
            Message::ExportCompleted(path) => format!("EXPORT READY! GET AFTER IT! Saved to: {}", path),
            Message::NothingToExport => "No tasks match the current filters, nothing to export.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleLlm => "Completion API settings".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Opened database at {}", path),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),

            // === PROMPTS ===
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptDueDate => "Due (YYYY-MM-DD HH:MM)".to_string(),
            Message::PromptPriority => "Priority".to_string(),
            Message::PromptCategory => "Category".to_string(),
            Message::PromptNotes => "Notes (optional)".to_string(),
            Message::PromptCategoryName => "New category name".to_string(),
            Message::PromptChatMessage => "Your message".to_string(),
            Message::PromptApiUrl => "Completion API URL".to_string(),
            Message::PromptModel => "Model name".to_string(),
            Message::PromptTimeout => "Request timeout (seconds)".to_string(),
            Message::PromptRetries => "Retries after a transient failure (0 disables)".to_string(),
            Message::PromptDatabaseFile => "Database file (relative to the data directory)".to_string(),
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::SelectTaskToComplete => "Select a task to complete".to_string(),
            Message::ConfirmClearChat => "Clear the entire chat history? This cannot be undone.".to_string(),

            // === GENERAL ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
