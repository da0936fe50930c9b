use super::categories::find_by_name;
use super::db::Db;
use super::timestamp_now;
use crate::libs::error::{GrindError, Result};
use crate::libs::task::{NewTask, StatusChange, Task, TaskFilter, TaskId, TaskStatus};
use chrono::NaiveDateTime;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (name, due_at, status, priority, category_id, notes, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_TASKS: &str = "SELECT t.id, t.name, t.due_at, t.status, t.priority, c.name, t.notes, t.created_at
    FROM tasks t
    JOIN categories c ON c.id = t.category_id";
const WHERE_ID: &str = "WHERE t.id = ?1";
// Due time first, then the most important task among equal due times.
const ORDER_FOR_DISPLAY: &str = "ORDER BY t.due_at ASC,
    CASE t.priority WHEN 'High' THEN 3 WHEN 'Medium' THEN 2 ELSE 1 END DESC,
    t.id ASC";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?1 WHERE id = ?2";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";

/// Task store: creation, filtered listing and status updates.
pub struct Tasks<'a> {
    conn: &'a Connection,
}

impl<'a> Tasks<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Persists a new pending task and returns its id.
    ///
    /// The category is looked up by name and the insert happens in the same
    /// transaction, so a task can never point at a missing category.
    pub fn create(&self, task: &NewTask) -> Result<TaskId> {
        let name = task.name.trim();
        if name.is_empty() {
            return Err(GrindError::Validation("Task name is required".to_string()));
        }

        let tx = self.conn.unchecked_transaction()?;

        let category = find_by_name(&tx, &task.category)?.ok_or_else(|| GrindError::InvalidCategory(task.category.clone()))?;
        let notes = task.notes.as_deref().filter(|n| !n.trim().is_empty());

        tx.execute(
            INSERT_TASK,
            params![name, task.due_at, TaskStatus::Pending, task.priority, category.id, notes, timestamp_now()],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        tracing::debug!(task_id = id, category = %category.name, "task created");
        Ok(id)
    }

    /// Tasks matching `filter`, ordered by due time ascending and then by
    /// priority descending. Never fails just because nothing matches.
    pub fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        if !filter.include_completed {
            conditions.push(format!("t.status != '{}'", TaskStatus::Completed.as_str()));
        }
        if !filter.categories.is_empty() {
            conditions.push(format!("c.name IN ({})", vec!["?"; filter.categories.len()].join(", ")));
            params.extend(filter.categories.iter().cloned());
        }
        if !filter.priorities.is_empty() {
            conditions.push(format!("t.priority IN ({})", vec!["?"; filter.priorities.len()].join(", ")));
            params.extend(filter.priorities.iter().map(|p| p.as_str().to_string()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        let query = format!("{} {} {}", SELECT_TASKS, where_clause, ORDER_FOR_DISPLAY);

        let mut stmt = self.conn.prepare(&query)?;
        let tasks = stmt
            .query_map(params_from_iter(params.iter()), task_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tasks)
    }

    /// Snapshot of every task, completed ones included.
    pub fn all(&self) -> Result<Vec<Task>> {
        self.list(&TaskFilter::all())
    }

    pub fn get(&self, id: TaskId) -> Result<Option<Task>> {
        let query = format!("{} {}", SELECT_TASKS, WHERE_ID);
        Ok(self.conn.query_row(&query, params![id], task_from_row).optional()?)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Persists `status` for task `id` and classifies the change against the
    /// current local time.
    pub fn update_status(&self, id: TaskId, status: TaskStatus) -> Result<StatusChange> {
        self.update_status_at(id, status, timestamp_now())
    }

    /// Persists `status` unconditionally, then classifies the change as of
    /// `now`. Any transition is accepted, including `completed -> pending`.
    pub fn update_status_at(&self, id: TaskId, status: TaskStatus, now: NaiveDateTime) -> Result<StatusChange> {
        let affected = self.conn.execute(UPDATE_STATUS, params![status, id])?;
        if affected == 0 {
            return Err(GrindError::task_not_found(id));
        }

        let task = self.get(id)?.ok_or_else(|| GrindError::task_not_found(id))?;
        let change = StatusChange::new(task, now);
        tracing::debug!(task_id = id, %status, tone = %change.tone(), "task status updated");
        Ok(change)
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        due_at: row.get(2)?,
        status: row.get(3)?,
        priority: row.get(4)?,
        category: row.get(5)?,
        notes: row.get(6)?,
        created_at: row.get(7)?,
    })
}
