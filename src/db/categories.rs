use super::db::Db;
use super::timestamp_now;
use crate::libs::error::{GrindError, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

/// Name of the category seeded into an empty registry.
pub const DEFAULT_CATEGORY: &str = "General";

const INSERT_CATEGORY: &str = "INSERT INTO categories (name, created_at) VALUES (?1, ?2)";
const SELECT_CATEGORIES: &str = "SELECT id, name, created_at FROM categories ORDER BY id";
const SELECT_CATEGORY_BY_NAME: &str = "SELECT id, name, created_at FROM categories WHERE name = ?1";
const COUNT_CATEGORIES: &str = "SELECT COUNT(*) FROM categories";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl Category {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Category {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}

/// Category registry. Names are unique and compared case-sensitively;
/// categories are never renamed or deleted.
pub struct Categories<'a> {
    conn: &'a Connection,
}

impl<'a> Categories<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    /// Inserts a category, failing with [`GrindError::Duplicate`] when the
    /// name is taken.
    pub fn insert(&self, name: &str) -> Result<i64> {
        insert_category(self.conn, name, timestamp_now())
    }

    /// Idempotent create: returns `Ok(false)` instead of failing when the
    /// category already exists.
    pub fn create(&self, name: &str) -> Result<bool> {
        match self.insert(name) {
            Ok(_) => Ok(true),
            Err(GrindError::Duplicate(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// All categories in insertion order.
    pub fn list(&self) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(SELECT_CATEGORIES)?;
        let categories = stmt.query_map([], Category::from_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(categories)
    }

    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self.list()?.into_iter().map(|c| c.name).collect())
    }

    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>> {
        find_by_name(self.conn, name)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_CATEGORIES, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Seeds [`DEFAULT_CATEGORY`] when the registry is empty. Must run before
    /// any task can be created. Returns whether a category was inserted.
    pub fn ensure_default_category(&self) -> Result<bool> {
        if self.count()? > 0 {
            return Ok(false);
        }
        self.insert(DEFAULT_CATEGORY)?;
        Ok(true)
    }
}

pub(crate) fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Category>> {
    Ok(conn.query_row(SELECT_CATEGORY_BY_NAME, params![name], Category::from_row).optional()?)
}

fn insert_category(conn: &Connection, name: &str, now: NaiveDateTime) -> Result<i64> {
    if name.trim().is_empty() {
        return Err(GrindError::Validation("Category name must not be empty".to_string()));
    }

    match conn.execute(INSERT_CATEGORY, params![name, now]) {
        Ok(_) => Ok(conn.last_insert_rowid()),
        Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
            Err(GrindError::Duplicate(name.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
