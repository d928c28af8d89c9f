use super::{Command, CommandContext, CommandOutcome};
use crate::result::CommandResult;

/// Reverse the most recent undoable command
#[derive(Default)]
pub struct UndoCommand;

impl UndoCommand {
    pub const COMMAND_WORD: &'static str = "undo";
    pub const ALIASES: &'static [&'static str] = &["undo", "u"];
    pub const USAGE: &'static str = "undo: Reverses the most recent change.";
}

impl Command for UndoCommand {
    fn execute(&mut self, context: &mut CommandContext) -> CommandOutcome {
        let result = context.undo_history.undo(&mut context.state)?;
        Ok(CommandResult::new(format!("Undo successful: {}", result.feedback())))
    }

    fn description(&self) -> String {
        "Undo".to_string()
    }
}

/// Reapply the most recently undone command
#[derive(Default)]
pub struct RedoCommand;

impl RedoCommand {
    pub const COMMAND_WORD: &'static str = "redo";
    pub const ALIASES: &'static [&'static str] = &["redo", "r"];
    pub const USAGE: &'static str = "redo: Reapplies the most recently undone change.";
}

impl Command for RedoCommand {
    fn execute(&mut self, context: &mut CommandContext) -> CommandOutcome {
        let result = context.undo_history.redo(&mut context.state)?;
        Ok(CommandResult::new(format!("Redo successful: {}", result.feedback())))
    }

    fn description(&self) -> String {
        "Redo".to_string()
    }
}
