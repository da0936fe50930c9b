//! SQLite persistence for grind.
//!
//! One [`db::Db`] owns the connection; the stores borrow it:
//!
//! ```rust,no_run
//! use grind::db::{categories::Categories, db::Db, tasks::Tasks};
//! use grind::libs::task::TaskFilter;
//!
//! let db = Db::open_in_memory()?;
//! Categories::new(&db).ensure_default_category()?;
//! let pending = Tasks::new(&db).list(&TaskFilter::pending())?;
//! # Ok::<(), grind::libs::error::GrindError>(())
//! ```

use chrono::{Local, NaiveDateTime, Timelike};

/// Connection ownership and initialization.
pub mod db;

/// Versioned schema migrations, applied on every open.
pub mod migrations;

/// Category registry.
pub mod categories;

/// Task creation, filtered listing and status updates.
pub mod tasks;

/// Persistent chat transcript.
pub mod chat;

/// Local wall-clock time truncated to whole seconds, used for every
/// `created_at` and chat `timestamp` column.
pub(crate) fn timestamp_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}
