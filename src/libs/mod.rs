//! Core library modules for grind.
//!
//! - **Domain**: task types, status classification, analytics
//! - **Motivation**: prompt templates and the status/chat orchestration
//! - **Infrastructure**: configuration, data directory, errors, messages
//! - **Presentation**: console tables, formatting, file export
//!
//! ## Usage
//!
//! ```rust,no_run
//! use grind::db::{db::Db, tasks::Tasks};
//! use grind::libs::analytics::TaskAnalytics;
//!
//! let db = Db::open_in_memory()?;
//! let snapshot = Tasks::new(&db).all()?;
//! let stats = TaskAnalytics::compute(&snapshot, chrono::Local::now().naive_local());
//! println!("{:.1}%", stats.completion_rate);
//! # Ok::<(), grind::libs::error::GrindError>(())
//! ```

pub mod analytics;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod motivation;
pub mod task;
pub mod view;
