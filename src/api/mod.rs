//! Text-generation collaborators.
//!
//! Everything that talks to a completion model goes through the
//! [`Generator`] trait, so the motivation layer can be driven by the real
//! [`groq::Groq`] client in production and by a canned stub in tests.
//!
//! ```rust,no_run
//! use grind::api::{groq::Groq, Generator};
//! use grind::libs::config::LlmConfig;
//!
//! # async fn run() -> Result<(), grind::libs::error::GenerationError> {
//! let groq = Groq::from_env(&LlmConfig::default())?;
//! let reply = groq.generate("Be brief.", "Say hi").await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::GenerationError;

pub mod groq;

pub use groq::Groq;

/// A single-shot completion: one system instruction, one user message, one
/// reply. Implementations carry no conversation state between calls.
#[allow(async_fn_in_trait)]
pub trait Generator {
    /// Returns the model's reply to `user_text` under `system_instruction`.
    ///
    /// # Errors
    ///
    /// Any [`GenerationError`]: missing configuration, timeout, transport
    /// failure, a non-success API status or an empty reply.
    async fn generate(&self, system_instruction: &str, user_text: &str) -> Result<String, GenerationError>;
}
