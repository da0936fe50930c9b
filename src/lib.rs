//! # grind
//!
//! A personal task tracker with a motivational coach backed by an
//! OpenAI-compatible chat completions API.
//!
//! - **Tasks**: due times, priorities, categories, completion tracking
//! - **Coach**: a generated message after every status change, plus an open chat
//! - **Stats**: completion rates, overdue counts, week-over-week comparison
//! - **Export**: CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use grind::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
