//! The entry point callers hand raw input to.

use crate::category::CategoryManager;
use crate::commands::{Command, CommandContext, StateContext};
use crate::history::{CommandHistory, UndoCommandHistory};
use crate::model::TaskModel;
use crate::parser::{CommandParser, Parser};
use crate::result::CommandResult;
use twodo_core::{AppConfig, LogicError};

/// Parses input, runs the resulting command, and keeps both histories.
///
/// Every input is recorded for recall, including input that failed to parse
/// or execute, so the user can fix what they typed. Only successful undoable
/// commands reach the undo history.
pub struct Logic<P = CommandParser> {
    parser: P,
    model: TaskModel,
    categories: Option<CategoryManager>,
    history: CommandHistory,
    undo_history: UndoCommandHistory,
}

impl Logic<CommandParser> {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_parts(CommandParser, TaskModel::new(), config)
    }
}

impl<P: Parser> Logic<P> {
    pub fn with_parts(parser: P, model: TaskModel, config: &AppConfig) -> Self {
        let categories = config
            .categories
            .then(|| CategoryManager::from_model(&model));
        Self {
            parser,
            model,
            categories,
            history: CommandHistory::with_limit(config.history_limit),
            undo_history: UndoCommandHistory::new(config.undo_limit),
        }
    }

    pub fn execute(&mut self, raw_input: &str) -> Result<CommandResult, LogicError> {
        let outcome = self.parse_and_execute(raw_input);
        self.history.append(raw_input);

        match outcome {
            Ok((command, result)) => {
                self.undo_history.record_executed(command);
                Ok(result)
            }
            Err(e) => {
                tracing::info!("Invalid command: {}", raw_input);
                Err(e)
            }
        }
    }

    fn parse_and_execute(
        &mut self,
        raw_input: &str,
    ) -> Result<(Box<dyn Command>, CommandResult), LogicError> {
        let mut command = self.parser.parse(raw_input)?;
        tracing::debug!("Executing: {}", command.description());

        let mut context = CommandContext {
            state: StateContext {
                model: &mut self.model,
                categories: self.categories.as_mut(),
            },
            history: &self.history,
            undo_history: &mut self.undo_history,
        };
        let result = command.execute(&mut context)?;
        Ok((command, result))
    }

    pub fn model(&self) -> &TaskModel {
        &self.model
    }

    pub fn categories(&self) -> Option<&CategoryManager> {
        self.categories.as_ref()
    }

    pub fn command_history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn undo_history(&self) -> &UndoCommandHistory {
        &self.undo_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{AddCommand, DeleteCommand, ListCommand};
    use crate::model::TaskFilter;
    use crate::parser::MockParser;
    use crate::task::Task;
    use twodo_core::{CommandError, ParseError};

    fn logic_with(parser: MockParser) -> Logic<MockParser> {
        Logic::with_parts(parser, TaskModel::new(), &AppConfig::default())
    }

    #[test]
    fn test_parse_error_is_recorded_for_recall_only() {
        let mut parser = MockParser::new();
        parser
            .expect_parse()
            .times(1)
            .returning(|input| Err(ParseError::UnknownCommand(input.to_string())));
        let mut logic = logic_with(parser);

        let err = logic.execute("fly").unwrap_err();
        assert_eq!(
            err,
            LogicError::Parse(ParseError::UnknownCommand("fly".to_string()))
        );
        assert_eq!(logic.command_history().get_history(), vec!["fly"]);
        assert_eq!(logic.undo_history().undo_depth(), 0);
        assert_eq!(logic.undo_history().redo_depth(), 0);
    }

    #[test]
    fn test_execution_error_is_recorded_for_recall_only() {
        let mut parser = MockParser::new();
        parser
            .expect_parse()
            .returning(|_| Ok(Box::new(DeleteCommand::new(3)) as Box<dyn Command>));
        let mut logic = logic_with(parser);

        let err = logic.execute("delete 3").unwrap_err();
        assert_eq!(err, LogicError::Command(CommandError::InvalidIndex(3)));
        assert_eq!(logic.command_history().get_history(), vec!["delete 3"]);
        assert!(!logic.undo_history().can_undo());
    }

    #[test]
    fn test_successful_undoable_command_is_recorded() {
        let mut parser = MockParser::new();
        parser.expect_parse().returning(|_| {
            Ok(Box::new(AddCommand::new(Task::new("Buy milk".to_string()))) as Box<dyn Command>)
        });
        let mut logic = logic_with(parser);

        let result = logic.execute("add n/Buy milk").unwrap();
        assert_eq!(result.feedback(), "New task added: Buy milk");
        assert_eq!(logic.model().len(), 1);
        assert_eq!(logic.undo_history().undo_depth(), 1);
        assert_eq!(logic.command_history().len(), 1);
    }

    #[test]
    fn test_successful_read_only_command_skips_undo() {
        let mut parser = MockParser::new();
        parser
            .expect_parse()
            .returning(|_| Ok(Box::new(ListCommand::new(TaskFilter::All)) as Box<dyn Command>));
        let mut logic = logic_with(parser);

        logic.execute("list all").unwrap();
        assert_eq!(logic.command_history().get_history(), vec!["list all"]);
        assert_eq!(logic.undo_history().undo_depth(), 0);
    }

    #[test]
    fn test_raw_input_is_recorded_verbatim() {
        let mut logic = Logic::new(&AppConfig::default());
        for input in ["  add n/Buy milk  ", "LIST", "", "nonsense here"] {
            let _ = logic.execute(input);
        }
        assert_eq!(
            logic.command_history().get_history(),
            vec!["  add n/Buy milk  ", "LIST", "", "nonsense here"]
        );
    }

    #[test]
    fn test_categories_follow_config() {
        let logic = Logic::new(&AppConfig::default());
        assert!(logic.categories().is_some());

        let config = AppConfig {
            categories: false,
            ..AppConfig::default()
        };
        let mut logic = Logic::new(&config);
        assert!(logic.categories().is_none());
        assert_eq!(
            logic.execute("category").unwrap_err(),
            LogicError::Command(CommandError::CategoriesUnavailable)
        );
        // Commands that don't need categories still work without them
        assert!(logic.execute("add n/Buy milk t/errand").is_ok());
    }

    #[test]
    fn test_limits_come_from_config() {
        let config = AppConfig {
            history_limit: Some(2),
            undo_limit: 1,
            categories: true,
        };
        let mut logic = Logic::new(&config);
        logic.execute("add n/A").unwrap();
        logic.execute("add n/B").unwrap();
        logic.execute("add n/C").unwrap();

        assert_eq!(logic.command_history().get_history(), vec!["add n/B", "add n/C"]);
        assert_eq!(logic.undo_history().undo_depth(), 1);
    }
}
