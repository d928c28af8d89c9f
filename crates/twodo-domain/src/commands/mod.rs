use crate::category::CategoryManager;
use crate::history::{CommandHistory, UndoCommandHistory};
use crate::model::TaskModel;
use crate::result::CommandResult;
use twodo_core::CommandError;

pub mod app_commands;
pub mod history_commands;
pub mod task_commands;
pub mod view_commands;

pub use app_commands::*;
pub use history_commands::*;
pub use task_commands::*;
pub use view_commands::*;

pub type CommandOutcome = Result<CommandResult, CommandError>;

/// A parsed user request, created fresh for every input.
///
/// `execute` may change the model and categories through the context, but
/// never the histories: recording the input and the executed command is the
/// executor's job.
pub trait Command: Send {
    fn execute(&mut self, context: &mut CommandContext) -> CommandOutcome;

    /// Human-readable description of what this command does
    fn description(&self) -> String;

    /// Whether the executor should keep this command for undo.
    fn is_undoable(&self) -> bool {
        false
    }

    /// Hand over the undo capability. Must be `Some` whenever `is_undoable` is true.
    fn into_undoable(self: Box<Self>) -> Option<Box<dyn UndoableCommand>> {
        None
    }
}

impl std::fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Command").field(&self.description()).finish()
    }
}

/// A command that already executed and can be reversed and reapplied.
pub trait UndoableCommand: Send {
    fn undo(&mut self, state: &mut StateContext) -> CommandOutcome;

    /// Reapply the original change. Must produce the same state as `execute` did.
    fn redo(&mut self, state: &mut StateContext) -> CommandOutcome;

    fn description(&self) -> String;
}

/// The mutable task state commands operate on.
pub struct StateContext<'a> {
    pub model: &'a mut TaskModel,
    pub categories: Option<&'a mut CategoryManager>,
}

impl StateContext<'_> {
    /// Bring categories in line with the model. Nothing to do when absent.
    pub fn sync_categories(&mut self) {
        if let Some(categories) = self.categories.as_deref_mut() {
            categories.sync(self.model);
        }
    }
}

/// Dependencies handed to a command for one execution
pub struct CommandContext<'a> {
    pub state: StateContext<'a>,
    pub history: &'a CommandHistory,
    pub undo_history: &'a mut UndoCommandHistory,
}

/// Every command's usage line, in help order.
pub fn usages() -> [&'static str; 14] {
    [
        AddCommand::USAGE,
        DeleteCommand::USAGE,
        EditCommand::USAGE,
        MarkCommand::MARK_USAGE,
        MarkCommand::UNMARK_USAGE,
        ClearCommand::USAGE,
        ListCommand::USAGE,
        FindCommand::USAGE,
        HistoryCommand::USAGE,
        CategoryCommand::USAGE,
        UndoCommand::USAGE,
        RedoCommand::USAGE,
        HelpCommand::USAGE,
        ExitCommand::USAGE,
    ]
}
