use crate::category::Category;
use crate::task::Task;
use serde::Serialize;

/// Structured data a command hands to the caller alongside its feedback.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Payload {
    Task(Task),
    Tasks(Vec<Task>),
    History(Vec<String>),
    Categories(Vec<Category>),
    /// The caller should shut down.
    Exit,
}

/// Outcome of a successful command execution.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResult {
    feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<Payload>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            payload: None,
        }
    }

    pub fn with_payload(feedback: impl Into<String>, payload: Payload) -> Self {
        Self {
            feedback: feedback.into(),
            payload: Some(payload),
        }
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    pub fn is_exit(&self) -> bool {
        matches!(self.payload, Some(Payload::Exit))
    }
}
