use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::Connection;
use std::path::Path;

/// Owner of the single SQLite connection shared by every store.
///
/// A `Db` is created once at process start and lent to [`Categories`],
/// [`Tasks`] and [`ChatLog`] by shared reference. Opening always enables
/// foreign keys and applies pending migrations, so a `Db` is ready to use as
/// soon as it exists.
///
/// [`Categories`]: super::categories::Categories
/// [`Tasks`]: super::tasks::Tasks
/// [`ChatLog`]: super::chat::ChatLog
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database configured in `config.json`, or `grind.db` in the
    /// data directory when nothing is configured.
    pub fn new() -> anyhow::Result<Db> {
        let storage = DataStorage::new();
        let config = Config::read_from(&storage)?;
        let path = config.database_path(&storage)?;
        Ok(Self::open(&path)?)
    }

    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));
        Self::prepare(conn)
    }

    /// An empty, fully migrated database that lives only as long as the
    /// returned value.
    pub fn open_in_memory() -> Result<Db> {
        Self::prepare(Connection::open_in_memory()?)
    }

    fn prepare(mut conn: Connection) -> Result<Db> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }
}
