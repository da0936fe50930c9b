//! Motivational messages for status changes and the open chat.
//!
//! Persisting a status and generating a message about it are separate
//! steps. [`Motivator::update_task_status`] runs both but reports them
//! separately, so a failed completion request never hides or rolls back a
//! status that was already saved.

use crate::api::Generator;
use crate::db::chat::{ChatLog, ChatRole};
use crate::db::tasks::Tasks;
use crate::libs::error::{GenerationError, Result};
use crate::libs::task::{Outcome, StatusChange, TaskId, TaskStatus};

/// Persona for on-time completions.
pub const CELEBRATION_INSTRUCTION: &str = "You are a relentless, drill-sergeant style motivator. \
Write a powerful, intense congratulation for a task that was completed on time. \
Use strong language but keep the tone positive. Answer in 2-3 hard-hitting sentences.";

/// Persona for late or incomplete tasks.
pub const WAKE_UP_INSTRUCTION: &str = "You are a relentless, drill-sergeant style motivator. \
Write a wake-up call for a task that was completed late or not completed at all. \
Use strong language to push the user to do better. Answer in 2-3 intense sentences.";

/// Persona for the open chat.
pub const CHAT_INSTRUCTION: &str = "You are a relentless, drill-sergeant style motivational coach. \
Give tough love and direct answers without sugar coating. Strong language is fine when it fits, \
but stay helpful: intense yet constructive. Keep answers to 2-3 sentences unless the user \
explicitly asks for detail.";

/// System instruction and user text for a status change.
pub fn status_prompt(change: &StatusChange) -> (&'static str, String) {
    let name = &change.task.name;
    match change.outcome {
        Outcome::OnTime => (
            CELEBRATION_INSTRUCTION,
            format!("Task '{}' completed on time! Write a congratulatory message.", name),
        ),
        outcome => (
            WAKE_UP_INSTRUCTION,
            format!("Task '{}' was {}. Write a wake-up call.", name, outcome.descriptor()),
        ),
    }
}

/// Outcome of a status update: the persisted change plus the message
/// generated for it, which may have failed on its own.
#[derive(Debug)]
pub struct StatusUpdate {
    pub change: StatusChange,
    pub message: std::result::Result<String, GenerationError>,
}

pub struct Motivator<G: Generator> {
    generator: G,
}

impl<G: Generator> Motivator<G> {
    pub fn new(generator: G) -> Self {
        Motivator { generator }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Generates the celebratory or corrective message for `change`.
    pub async fn status_message(&self, change: &StatusChange) -> std::result::Result<String, GenerationError> {
        let (instruction, user_text) = status_prompt(change);
        self.generator.generate(instruction, &user_text).await
    }

    /// Persists `status` for task `id`, then asks for a message about it.
    ///
    /// Storage failures (including an unknown id) are returned as errors and
    /// no message is requested. Generation failures land in
    /// [`StatusUpdate::message`] with the status already saved.
    pub async fn update_task_status(&self, tasks: &Tasks<'_>, id: TaskId, status: TaskStatus) -> Result<StatusUpdate> {
        let change = tasks.update_status(id, status)?;
        let message = self.status_message(&change).await;
        if let Err(e) = &message {
            tracing::warn!(task_id = id, error = %e, "status saved but message generation failed");
        }
        Ok(StatusUpdate { change, message })
    }

    /// One chat turn: log the user's text, ask the model, log the reply.
    ///
    /// The model sees only this turn's input, never the earlier history. If
    /// generation fails the user message stays in the log and nothing is
    /// recorded for the assistant.
    pub async fn chat_turn(&self, log: &ChatLog<'_>, input: &str) -> Result<String> {
        log.append(ChatRole::User, input)?;
        let reply = self.generator.generate(CHAT_INSTRUCTION, input).await?;
        log.append(ChatRole::Assistant, &reply)?;
        Ok(reply)
    }
}
