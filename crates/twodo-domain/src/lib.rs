pub mod category;
pub mod commands;
pub mod field_update;
pub mod history;
pub mod logic;
pub mod model;
pub mod parser;
pub mod result;
pub mod task;

pub use category::{Category, CategoryManager};
pub use commands::{Command, CommandContext, CommandOutcome, StateContext, UndoableCommand};
pub use field_update::FieldUpdate;
pub use history::{CommandHistory, UndoCommandHistory};
pub use logic::Logic;
pub use model::{TaskFilter, TaskModel};
pub use parser::{CommandParser, Parser};
pub use result::{CommandResult, Payload};
pub use task::{Deadline, Task, TaskId};
