//! Input line state, kept separate from how it is drawn.

use twodo_core::{InputRecall, LogicError};
use twodo_domain::{CommandParser, CommandResult, Logic, Parser};

/// The line the user is typing, with recall over everything typed before.
pub struct CommandBox<P: Parser = CommandParser> {
    logic: Logic<P>,
    text: String,
    recall: InputRecall,
    error: bool,
}

impl<P: Parser> CommandBox<P> {
    pub fn new(logic: Logic<P>) -> Self {
        let recall = InputRecall::new(logic.command_history().get_history());
        Self {
            logic,
            text: String::new(),
            recall,
            error: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the typed text. Editing clears the error style.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.error = false;
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Execute the current text. Returns `None` when there is nothing to run.
    ///
    /// On success the text is cleared; on failure it stays so it can be fixed.
    /// Either way recall restarts from the newest entry.
    pub fn submit(&mut self) -> Option<Result<CommandResult, LogicError>> {
        if self.text.trim().is_empty() {
            return None;
        }

        let outcome = self.logic.execute(&self.text);
        match &outcome {
            Ok(_) => {
                self.text.clear();
                self.error = false;
            }
            Err(_) => self.error = true,
        }
        self.recall.reset(self.logic.command_history().get_history());
        Some(outcome)
    }

    /// Load the previous input, if there is an older one.
    pub fn key_up(&mut self) {
        if let Some(entry) = self.recall.previous() {
            self.text = entry.to_string();
            self.error = false;
        }
    }

    /// Load the next input, if there is a newer one.
    pub fn key_down(&mut self) {
        if let Some(entry) = self.recall.next() {
            self.text = entry.to_string();
            self.error = false;
        }
    }

    pub fn logic(&self) -> &Logic<P> {
        &self.logic
    }
}
