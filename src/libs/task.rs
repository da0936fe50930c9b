//! Task domain types.
//!
//! Status and priority are closed enumerations. They are stored in SQLite as
//! their canonical strings (`pending`/`completed`, `Low`/`Medium`/`High`) and
//! parsed back strictly, so a typo can never slip through as a silent no-op.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub type TaskId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(other.to_string()),
        }
    }
}

/// Task priority. Variant order defines the ranking: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Marker shown next to the task name in listings.
    pub fn indicator(&self) -> &'static str {
        match self {
            Priority::High => "🔥",
            Priority::Medium => "⚡",
            Priority::Low => "",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(other.to_string()),
        }
    }
}

/// Stores a closed enum as its `as_str()` text and parses it back with
/// `FromStr<Err = String>`, rejecting anything else.
macro_rules! sql_text_enum {
    ($ty:ty) => {
        impl rusqlite::types::ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
                Ok(rusqlite::types::ToSqlOutput::from(self.as_str()))
            }
        }

        impl rusqlite::types::FromSql for $ty {
            fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
                value.as_str()?.parse().map_err(|invalid: String| {
                    rusqlite::types::FromSqlError::Other(format!("unexpected value '{}'", invalid).into())
                })
            }
        }
    };
}
pub(crate) use sql_text_enum;

sql_text_enum!(TaskStatus);
sql_text_enum!(Priority);

/// Display state of a task. `Overdue` is derived from the due time and is
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Pending,
    Overdue,
    Completed,
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskState::Pending => "Pending",
            TaskState::Overdue => "Overdue!",
            TaskState::Completed => "Completed ✓",
        };
        f.write_str(label)
    }
}

/// A persisted task with its category name resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub due_at: NaiveDateTime,
    pub status: TaskStatus,
    pub priority: Priority,
    pub category: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// A task is overdue when it is not completed and its due time is
    /// strictly in the past.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.is_completed() && self.due_at < now
    }

    pub fn state(&self, now: NaiveDateTime) -> TaskState {
        if self.is_completed() {
            TaskState::Completed
        } else if self.is_overdue(now) {
            TaskState::Overdue
        } else {
            TaskState::Pending
        }
    }
}

/// Input for task creation. The category is referenced by name.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub name: String,
    pub due_at: NaiveDateTime,
    pub priority: Priority,
    pub category: String,
    pub notes: Option<String>,
}

impl NewTask {
    pub fn new(name: &str, due_at: NaiveDateTime, priority: Priority, category: &str) -> Self {
        NewTask {
            name: name.to_string(),
            due_at,
            priority,
            category: category.to_string(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = if notes.trim().is_empty() { None } else { Some(notes.to_string()) };
        self
    }
}

/// Listing filter. All constraints are combined with AND; an empty set
/// means "no constraint" for that dimension.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub include_completed: bool,
    pub categories: BTreeSet<String>,
    pub priorities: BTreeSet<Priority>,
}

impl TaskFilter {
    /// Pending tasks of every category and priority.
    pub fn pending() -> Self {
        Self::default()
    }

    /// Every task, completed ones included.
    pub fn all() -> Self {
        TaskFilter {
            include_completed: true,
            ..Self::default()
        }
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn with_priorities<I>(mut self, priorities: I) -> Self
    where
        I: IntoIterator<Item = Priority>,
    {
        self.priorities.extend(priorities);
        self
    }

    pub fn matches(&self, task: &Task) -> bool {
        (self.include_completed || !task.is_completed())
            && (self.categories.is_empty() || self.categories.contains(&task.category))
            && (self.priorities.is_empty() || self.priorities.contains(&task.priority))
    }
}

/// How a status change relates to the task's due time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    OnTime,
    Late,
    NotCompleted,
}

impl Outcome {
    pub fn classify(status: TaskStatus, due_at: NaiveDateTime, now: NaiveDateTime) -> Self {
        match status {
            TaskStatus::Completed if now <= due_at => Outcome::OnTime,
            TaskStatus::Completed => Outcome::Late,
            TaskStatus::Pending => Outcome::NotCompleted,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Outcome::OnTime => Tone::Celebratory,
            Outcome::Late | Outcome::NotCompleted => Tone::Corrective,
        }
    }

    /// Status descriptor used by the wake-up call template.
    pub fn descriptor(&self) -> &'static str {
        match self {
            Outcome::OnTime => "completed on time",
            Outcome::Late => "completed late",
            Outcome::NotCompleted => "not completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Celebratory,
    Corrective,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tone::Celebratory => "celebratory",
            Tone::Corrective => "corrective",
        })
    }
}

/// Result of a persisted status update, before any message is generated.
#[derive(Debug, Clone)]
pub struct StatusChange {
    /// The task as it is after the update.
    pub task: Task,
    pub changed_at: NaiveDateTime,
    pub outcome: Outcome,
}

impl StatusChange {
    pub fn new(task: Task, changed_at: NaiveDateTime) -> Self {
        let outcome = Outcome::classify(task.status, task.due_at, changed_at);
        StatusChange { task, changed_at, outcome }
    }

    pub fn tone(&self) -> Tone {
        self.outcome.tone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn completion_on_or_before_due_is_celebratory() {
        assert_eq!(Outcome::classify(TaskStatus::Completed, at(10, 0), at(9, 0)).tone(), Tone::Celebratory);
        assert_eq!(Outcome::classify(TaskStatus::Completed, at(10, 0), at(10, 0)).tone(), Tone::Celebratory);
    }

    #[test]
    fn late_or_incomplete_is_corrective() {
        let late = Outcome::classify(TaskStatus::Completed, at(10, 0), at(11, 0));
        assert_eq!(late, Outcome::Late);
        assert_eq!(late.tone(), Tone::Corrective);
        assert_eq!(late.descriptor(), "completed late");

        let reopened = Outcome::classify(TaskStatus::Pending, at(10, 0), at(9, 0));
        assert_eq!(reopened, Outcome::NotCompleted);
        assert_eq!(reopened.descriptor(), "not completed");
    }

    #[test]
    fn priority_ranking() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!("HIGH".parse::<Priority>(), Ok(Priority::High));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(NewTask::new("Stretch", at(9, 0), Priority::default(), "General").priority, Priority::Medium);
    }

    #[test]
    fn status_change_carries_new_status_and_derived_tone() {
        let task = Task {
            id: 7,
            name: "Stretch".to_string(),
            due_at: at(10, 0),
            status: TaskStatus::Completed,
            priority: Priority::Low,
            category: "General".to_string(),
            notes: None,
            created_at: at(8, 0),
        };
        let change = StatusChange::new(task, at(11, 0));
        assert_eq!(change.task.status, TaskStatus::Completed);
        assert_eq!(change.outcome, Outcome::Late);
        assert_eq!(change.tone(), change.outcome.tone());
        assert_eq!(change.tone(), Tone::Corrective);
    }

    #[test]
    fn status_parsing_is_strict() {
        assert_eq!("Completed".parse::<TaskStatus>(), Ok(TaskStatus::Completed));
        assert!("complete".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn filter_sets_are_conjunctive() {
        let task = Task {
            id: 1,
            name: "Plan sprint".to_string(),
            due_at: at(10, 0),
            status: TaskStatus::Pending,
            priority: Priority::High,
            category: "Work".to_string(),
            notes: None,
            created_at: at(8, 0),
        };

        assert!(TaskFilter::pending().matches(&task));
        assert!(TaskFilter::pending().with_categories(["Work", "Home"]).matches(&task));
        assert!(!TaskFilter::pending().with_categories(["Work"]).with_priorities([Priority::Low]).matches(&task));

        let done = Task { status: TaskStatus::Completed, ..task };
        assert!(!TaskFilter::pending().matches(&done));
        assert!(TaskFilter::all().matches(&done));
    }
}
