use super::{Command, CommandContext, CommandOutcome};
use crate::model::{TaskFilter, TaskModel};
use crate::result::{CommandResult, Payload};
use twodo_core::CommandError;

fn show_view(model: &mut TaskModel, filter: TaskFilter) -> CommandResult {
    model.set_filter(filter);
    let tasks: Vec<_> = model.filtered_view().into_iter().cloned().collect();
    CommandResult::with_payload(format!("{} tasks listed!", tasks.len()), Payload::Tasks(tasks))
}

/// Show tasks matching a completion filter
pub struct ListCommand {
    pub filter: TaskFilter,
}

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const ALIASES: &'static [&'static str] = &["list", "l", "ls"];
    pub const USAGE: &'static str = "list: Lists tasks. Parameters: [all|done|undone]";

    pub fn new(filter: TaskFilter) -> Self {
        Self { filter }
    }
}

impl Command for ListCommand {
    fn execute(&mut self, context: &mut CommandContext) -> CommandOutcome {
        Ok(show_view(context.state.model, self.filter.clone()))
    }

    fn description(&self) -> String {
        format!("List tasks ({:?})", self.filter)
    }
}

/// Show tasks whose name words or tags match any keyword
pub struct FindCommand {
    pub keywords: Vec<String>,
}

impl FindCommand {
    pub const COMMAND_WORD: &'static str = "find";
    pub const ALIASES: &'static [&'static str] = &["find", "f"];
    pub const USAGE: &'static str =
        "find: Lists tasks whose name or tags contain any keyword. Parameters: KEYWORD...";

    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Command for FindCommand {
    fn execute(&mut self, context: &mut CommandContext) -> CommandOutcome {
        Ok(show_view(
            context.state.model,
            TaskFilter::Keywords(self.keywords.clone()),
        ))
    }

    fn description(&self) -> String {
        format!("Find tasks: {}", self.keywords.join(" "))
    }
}

/// Show previously entered input, newest first
#[derive(Default)]
pub struct HistoryCommand;

impl HistoryCommand {
    pub const COMMAND_WORD: &'static str = "history";
    pub const ALIASES: &'static [&'static str] = &["history", "h"];
    pub const USAGE: &'static str = "history: Lists previously entered input, newest first.";
}

impl Command for HistoryCommand {
    fn execute(&mut self, context: &mut CommandContext) -> CommandOutcome {
        let mut entries = context.history.get_history();
        if entries.is_empty() {
            return Ok(CommandResult::new("You have not yet entered any commands."));
        }
        entries.reverse();
        Ok(CommandResult::with_payload(
            format!("Entered commands (from most recent to earliest):\n{}", entries.join("\n")),
            Payload::History(entries),
        ))
    }

    fn description(&self) -> String {
        "Show input history".to_string()
    }
}

/// Show categories and how many tasks carry each
#[derive(Default)]
pub struct CategoryCommand;

impl CategoryCommand {
    pub const COMMAND_WORD: &'static str = "category";
    pub const ALIASES: &'static [&'static str] = &["category", "cat"];
    pub const USAGE: &'static str = "category: Lists categories with their task counts.";
}

impl Command for CategoryCommand {
    fn execute(&mut self, context: &mut CommandContext) -> CommandOutcome {
        let categories = context
            .state
            .categories
            .as_deref()
            .ok_or(CommandError::CategoriesUnavailable)?
            .categories();
        if categories.is_empty() {
            return Ok(CommandResult::with_payload(
                "No categories yet",
                Payload::Categories(categories),
            ));
        }
        let lines: Vec<_> = categories
            .iter()
            .map(|c| format!("{} ({})", c.name, c.task_count))
            .collect();
        Ok(CommandResult::with_payload(
            format!("Categories:\n{}", lines.join("\n")),
            Payload::Categories(categories),
        ))
    }

    fn description(&self) -> String {
        "Show categories".to_string()
    }
}
