use thiserror::Error;

#[derive(Error, Debug)]
pub enum TwoDoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Rejected input. The display text is shown to the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid command format!\n{usage}")]
    InvalidFormat { usage: String },

    #[error("The task index provided must be a positive integer.\n{usage}")]
    InvalidIndex { usage: String },

    #[error("Missing field {field}.\n{usage}")]
    MissingField { field: &'static str, usage: String },

    #[error("Invalid date '{0}': expected YYYY-MM-DD or YYYY-MM-DD HH:MM")]
    InvalidDate(String),

    #[error("Invalid deadline: {0}")]
    InvalidDeadline(String),
}

/// Valid input that could not be carried out against the current state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("The task index provided is invalid: {0}")]
    InvalidIndex(usize),

    #[error("This task already exists in the list")]
    DuplicateTask,

    #[error("Categories are not available in this session")]
    CategoriesUnavailable,

    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("Nothing to redo")]
    NothingToRedo,

    #[error("{0}")]
    Failed(String),
}

/// Everything `Logic::execute` can hand back to its caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_carries_usage_hint() {
        let err = ParseError::InvalidFormat {
            usage: "delete INDEX".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid command format!\ndelete INDEX");
    }

    #[test]
    fn test_logic_error_is_transparent() {
        let err: LogicError = CommandError::NothingToUndo.into();
        assert_eq!(err.to_string(), "Nothing to undo");

        let err: LogicError = ParseError::UnknownCommand("fly".to_string()).into();
        assert_eq!(err.to_string(), "Unknown command: fly");
    }
}
