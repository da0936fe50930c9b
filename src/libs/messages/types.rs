//! Message catalogue for every user-facing line grind prints.
//!
//! Variants are grouped by the area of the application that emits them.
//! The text lives in [`super::display`]; this file only declares the shape
//! of each message and the data it interpolates.

use crate::libs::task::TaskStatus;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreatedWithId(String, i64),
    TaskNameRequired,
    TaskNotFound(i64),
    TaskStatusUpdated(String, TaskStatus),
    TasksHeader,
    NoTasksFound,
    InvalidDueDate(String),

    // === CATEGORY MESSAGES ===
    CategoryCreated(String),
    CategoryAlreadyExists(String),
    CategoryNotFound(String),
    CategoryNameRequired,
    CategoriesHeader,
    NoCategoriesFound,
    DefaultCategorySeeded(String),

    // === CHAT MESSAGES ===
    ChatHeader,
    ChatHistoryEmpty,
    ChatCleared(usize),
    ChatThinking,
    ChatYou,
    ChatCoach,

    // === GENERATION MESSAGES ===
    GenerationFailed(String),
    StatusSavedButMessageFailed(String),
    ApiKeyMissing(String),
    RetryingGeneration(u32),

    // === ANALYTICS MESSAGES ===
    NoDataToAnalyze,
    StatsOverviewHeader,
    StatsCategoryHeader,
    StatsPriorityHeader,
    StatsDailyHeader,
    StatsWeekHeader,
    VerdictCrushing,
    VerdictProgressing,
    VerdictSlacking,

    // === EXPORT MESSAGES ===
    ExportingTasks(usize, String),
    ExportCompleted(String),
    NothingToExport,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleLlm,
    ConfigModuleStorage,

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),
    DatabaseUpToDate,
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === PROMPTS ===
    PromptTaskName,
    PromptDueDate,
    PromptPriority,
    PromptCategory,
    PromptNotes,
    PromptCategoryName,
    PromptChatMessage,
    PromptApiUrl,
    PromptModel,
    PromptTimeout,
    PromptRetries,
    PromptDatabaseFile,
    PromptSelectModules,
    SelectTaskToComplete,
    ConfirmClearChat,

    // === GENERAL ===
    OperationCancelled,
}
