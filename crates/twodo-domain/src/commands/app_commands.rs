use super::{usages, Command, CommandContext, CommandOutcome};
use crate::result::{CommandResult, Payload};

/// Show every command's usage
#[derive(Default)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const USAGE: &'static str = "help: Shows this list.";
}

impl Command for HelpCommand {
    fn execute(&mut self, _context: &mut CommandContext) -> CommandOutcome {
        Ok(CommandResult::new(usages().join("\n")))
    }

    fn description(&self) -> String {
        "Show help".to_string()
    }
}

/// Ask the caller to shut down
#[derive(Default)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const ALIASES: &'static [&'static str] = &["exit", "quit", "x", "q"];
    pub const USAGE: &'static str = "exit: Exits twodo.";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting twodo as requested ...";
}

impl Command for ExitCommand {
    fn execute(&mut self, _context: &mut CommandContext) -> CommandOutcome {
        Ok(CommandResult::with_payload(
            Self::MESSAGE_EXIT_ACKNOWLEDGEMENT,
            Payload::Exit,
        ))
    }

    fn description(&self) -> String {
        "Exit".to_string()
    }
}
