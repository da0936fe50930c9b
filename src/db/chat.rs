use super::db::Db;
use super::timestamp_now;
use crate::libs::error::Result;
use crate::libs::task::sql_text_enum;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const INSERT_MESSAGE: &str = "INSERT INTO chat_messages (role, content, timestamp) VALUES (?1, ?2, ?3)";
const SELECT_HISTORY: &str = "SELECT id, role, content, timestamp FROM chat_messages ORDER BY timestamp ASC, id ASC";
const DELETE_ALL: &str = "DELETE FROM chat_messages";
const COUNT_MESSAGES: &str = "SELECT COUNT(*) FROM chat_messages";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(ChatRole::User),
            "assistant" => Ok(ChatRole::Assistant),
            other => Err(other.to_string()),
        }
    }
}

sql_text_enum!(ChatRole);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: NaiveDateTime,
}

impl ChatMessage {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(ChatMessage {
            id: row.get(0)?,
            role: row.get(1)?,
            content: row.get(2)?,
            timestamp: row.get(3)?,
        })
    }
}

/// Append-only chat transcript. Messages sharing a timestamp keep their
/// insertion order.
pub struct ChatLog<'a> {
    conn: &'a Connection,
}

impl<'a> ChatLog<'a> {
    pub fn new(db: &'a Db) -> Self {
        Self { conn: &db.conn }
    }

    pub fn append(&self, role: ChatRole, content: &str) -> Result<i64> {
        self.append_at(role, content, timestamp_now())
    }

    pub fn append_at(&self, role: ChatRole, content: &str, timestamp: NaiveDateTime) -> Result<i64> {
        self.conn.execute(INSERT_MESSAGE, params![role, content, timestamp])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Full transcript, oldest first.
    pub fn history(&self) -> Result<Vec<ChatMessage>> {
        let mut stmt = self.conn.prepare(SELECT_HISTORY)?;
        let messages = stmt.query_map([], ChatMessage::from_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(messages)
    }

    /// Deletes every message and returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let removed = self.conn.execute(DELETE_ALL, [])?;
        tracing::debug!(removed, "chat history cleared");
        Ok(removed)
    }

    pub fn len(&self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_MESSAGES, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
