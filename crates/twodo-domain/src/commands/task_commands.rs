use super::{Command, CommandContext, CommandOutcome, StateContext, UndoableCommand};
use crate::field_update::FieldUpdate;
use crate::result::{CommandResult, Payload};
use crate::task::{Deadline, Task, TaskId};
use std::collections::BTreeSet;
use twodo_core::CommandError;

fn missing_task(id: TaskId) -> CommandError {
    CommandError::Failed(format!("Task {} no longer exists", id))
}

/// Add a new task
pub struct AddCommand {
    pub task: Task,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";
    pub const ALIASES: &'static [&'static str] = &["add", "a"];
    pub const USAGE: &'static str =
        "add: Adds a task. Parameters: n/NAME [d/DESCRIPTION] [s/START] [e/END] [t/TAG]...";

    pub fn new(task: Task) -> Self {
        Self { task }
    }

    fn apply(&self, state: &mut StateContext) -> CommandOutcome {
        state.model.add(self.task.clone())?;
        state.sync_categories();
        Ok(CommandResult::with_payload(
            format!("New task added: {}", self.task),
            Payload::Task(self.task.clone()),
        ))
    }
}

impl Command for AddCommand {
    fn execute(&mut self, context: &mut CommandContext) -> CommandOutcome {
        self.apply(&mut context.state)
    }

    fn description(&self) -> String {
        format!("Add task: '{}'", self.task.name)
    }

    fn is_undoable(&self) -> bool {
        true
    }

    fn into_undoable(self: Box<Self>) -> Option<Box<dyn UndoableCommand>> {
        Some(self)
    }
}

impl UndoableCommand for AddCommand {
    fn undo(&mut self, state: &mut StateContext) -> CommandOutcome {
        state
            .model
            .remove(self.task.id)
            .ok_or_else(|| missing_task(self.task.id))?;
        state.sync_categories();
        Ok(CommandResult::new(format!("Undid add: {}", self.task)))
    }

    fn redo(&mut self, state: &mut StateContext) -> CommandOutcome {
        self.apply(state)
    }

    fn description(&self) -> String {
        Command::description(self)
    }
}

/// Delete the task at a displayed index
pub struct DeleteCommand {
    pub index: usize,
    removed: Option<(usize, Task)>,
}

impl DeleteCommand {
    pub const COMMAND_WORD: &'static str = "delete";
    pub const ALIASES: &'static [&'static str] = &["delete", "del", "d"];
    pub const USAGE: &'static str =
        "delete: Deletes the task at the listed index. Parameters: INDEX";

    pub fn new(index: usize) -> Self {
        Self {
            index,
            removed: None,
        }
    }

    fn remove(state: &mut StateContext, id: TaskId) -> Result<(usize, Task), CommandError> {
        let removed = state.model.remove(id).ok_or_else(|| missing_task(id))?;
        state.sync_categories();
        Ok(removed)
    }
}

impl Command for DeleteCommand {
    fn execute(&mut self, context: &mut CommandContext) -> CommandOutcome {
        let id = context.state.model.get_by_index(self.index)?.id;
        let (position, task) = Self::remove(&mut context.state, id)?;
        let result = CommandResult::with_payload(
            format!("Deleted task: {}", task),
            Payload::Task(task.clone()),
        );
        self.removed = Some((position, task));
        Ok(result)
    }

    fn description(&self) -> String {
        format!("Delete task {}", self.index)
    }

    fn is_undoable(&self) -> bool {
        true
    }

    fn into_undoable(self: Box<Self>) -> Option<Box<dyn UndoableCommand>> {
        Some(self)
    }
}

impl UndoableCommand for DeleteCommand {
    fn undo(&mut self, state: &mut StateContext) -> CommandOutcome {
        let (position, task) = self
            .removed
            .as_ref()
            .ok_or_else(|| CommandError::Failed("Delete was never executed".to_string()))?;
        state.model.insert(*position, task.clone());
        state.sync_categories();
        Ok(CommandResult::new(format!("Restored task: {}", task)))
    }

    fn redo(&mut self, state: &mut StateContext) -> CommandOutcome {
        let id = self
            .removed
            .as_ref()
            .map(|(_, task)| task.id)
            .ok_or_else(|| CommandError::Failed("Delete was never executed".to_string()))?;
        let (position, task) = Self::remove(state, id)?;
        let result = CommandResult::new(format!("Deleted task: {}", task));
        self.removed = Some((position, task));
        Ok(result)
    }

    fn description(&self) -> String {
        Command::description(self)
    }
}

/// Fields changed by `edit`. Unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    pub name: Option<String>,
    pub description: FieldUpdate<String>,
    pub deadline: FieldUpdate<Deadline>,
    pub tags: Option<BTreeSet<String>>,
}

impl TaskEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && !self.description.is_change()
            && !self.deadline.is_change()
            && self.tags.is_none()
    }

    pub fn apply(&self, task: &Task) -> Task {
        let mut edited = task.clone();
        if let Some(name) = &self.name {
            edited.name = name.clone();
        }
        self.description.clone().apply_to(&mut edited.description);
        self.deadline.clone().apply_to(&mut edited.deadline);
        if let Some(tags) = &self.tags {
            edited.tags = tags.clone();
        }
        edited
    }
}

/// Edit the task at a displayed index
pub struct EditCommand {
    pub index: usize,
    pub edit: TaskEdit,
    versions: Option<(Task, Task)>,
}

impl EditCommand {
    pub const COMMAND_WORD: &'static str = "edit";
    pub const ALIASES: &'static [&'static str] = &["edit", "e"];
    pub const USAGE: &'static str = "edit: Edits the task at the listed index. \
        Parameters: INDEX [n/NAME] [d/DESCRIPTION] [s/START] [e/END] [t/TAG]... \
        (empty d/ or t/ clears the field)";

    pub fn new(index: usize, edit: TaskEdit) -> Self {
        Self {
            index,
            edit,
            versions: None,
        }
    }

    fn replace(state: &mut StateContext, task: Task) -> Result<Task, CommandError> {
        let previous = state.model.update(task)?;
        state.sync_categories();
        Ok(previous)
    }

    fn versions(&self) -> Result<&(Task, Task), CommandError> {
        self.versions
            .as_ref()
            .ok_or_else(|| CommandError::Failed("Edit was never executed".to_string()))
    }
}

impl Command for EditCommand {
    fn execute(&mut self, context: &mut CommandContext) -> CommandOutcome {
        let edited = self.edit.apply(context.state.model.get_by_index(self.index)?);
        let previous = Self::replace(&mut context.state, edited.clone())?;
        let result = CommandResult::with_payload(
            format!("Edited task: {}", edited),
            Payload::Task(edited.clone()),
        );
        self.versions = Some((previous, edited));
        Ok(result)
    }

    fn description(&self) -> String {
        format!("Edit task {}", self.index)
    }

    fn is_undoable(&self) -> bool {
        true
    }

    fn into_undoable(self: Box<Self>) -> Option<Box<dyn UndoableCommand>> {
        Some(self)
    }
}

impl UndoableCommand for EditCommand {
    fn undo(&mut self, state: &mut StateContext) -> CommandOutcome {
        let (previous, _) = self.versions()?;
        Self::replace(state, previous.clone())?;
        Ok(CommandResult::new(format!("Reverted task: {}", previous)))
    }

    fn redo(&mut self, state: &mut StateContext) -> CommandOutcome {
        let (_, edited) = self.versions()?;
        Self::replace(state, edited.clone())?;
        Ok(CommandResult::new(format!("Edited task: {}", edited)))
    }

    fn description(&self) -> String {
        Command::description(self)
    }
}

/// Mark or unmark the task at a displayed index as completed
pub struct MarkCommand {
    pub index: usize,
    pub completed: bool,
    target: Option<TaskId>,
}

impl MarkCommand {
    pub const MARK_WORD: &'static str = "mark";
    pub const MARK_ALIASES: &'static [&'static str] = &["mark", "m"];
    pub const MARK_USAGE: &'static str =
        "mark: Marks the task at the listed index as completed. Parameters: INDEX";
    pub const UNMARK_WORD: &'static str = "unmark";
    pub const UNMARK_ALIASES: &'static [&'static str] = &["unmark", "um"];
    pub const UNMARK_USAGE: &'static str =
        "unmark: Marks the task at the listed index as not completed. Parameters: INDEX";

    pub fn mark(index: usize) -> Self {
        Self {
            index,
            completed: true,
            target: None,
        }
    }

    pub fn unmark(index: usize) -> Self {
        Self {
            index,
            completed: false,
            target: None,
        }
    }

    fn set_completed(
        state: &mut StateContext,
        id: TaskId,
        completed: bool,
    ) -> Result<Task, CommandError> {
        let mut task = state
            .model
            .find(id)
            .cloned()
            .ok_or_else(|| missing_task(id))?;
        task.completed = completed;
        state.model.update(task.clone())?;
        Ok(task)
    }

    fn feedback(task: &Task) -> String {
        if task.completed {
            format!("Completed task: {}", task)
        } else {
            format!("Task not completed: {}", task)
        }
    }

    fn target(&self) -> Result<TaskId, CommandError> {
        self.target
            .ok_or_else(|| CommandError::Failed("Mark was never executed".to_string()))
    }
}

impl Command for MarkCommand {
    fn execute(&mut self, context: &mut CommandContext) -> CommandOutcome {
        let task = context.state.model.get_by_index(self.index)?;
        if task.completed == self.completed {
            let state = if self.completed { "completed" } else { "not completed" };
            return Err(CommandError::Failed(format!("Task is already {}", state)));
        }
        let id = task.id;
        let task = Self::set_completed(&mut context.state, id, self.completed)?;
        self.target = Some(id);
        Ok(CommandResult::with_payload(Self::feedback(&task), Payload::Task(task)))
    }

    fn description(&self) -> String {
        let verb = if self.completed { "Mark" } else { "Unmark" };
        format!("{} task {}", verb, self.index)
    }

    fn is_undoable(&self) -> bool {
        true
    }

    fn into_undoable(self: Box<Self>) -> Option<Box<dyn UndoableCommand>> {
        Some(self)
    }
}

impl UndoableCommand for MarkCommand {
    fn undo(&mut self, state: &mut StateContext) -> CommandOutcome {
        let task = Self::set_completed(state, self.target()?, !self.completed)?;
        Ok(CommandResult::new(Self::feedback(&task)))
    }

    fn redo(&mut self, state: &mut StateContext) -> CommandOutcome {
        let task = Self::set_completed(state, self.target()?, self.completed)?;
        Ok(CommandResult::new(Self::feedback(&task)))
    }

    fn description(&self) -> String {
        Command::description(self)
    }
}

/// Remove every task
#[derive(Default)]
pub struct ClearCommand {
    cleared: Vec<Task>,
}

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const USAGE: &'static str = "clear: Removes every task.";

    pub fn new() -> Self {
        Self::default()
    }

    fn apply(&mut self, state: &mut StateContext) -> CommandOutcome {
        self.cleared = state.model.clear();
        state.sync_categories();
        Ok(CommandResult::new("Task list has been cleared!"))
    }
}

impl Command for ClearCommand {
    fn execute(&mut self, context: &mut CommandContext) -> CommandOutcome {
        self.apply(&mut context.state)
    }

    fn description(&self) -> String {
        "Clear all tasks".to_string()
    }

    fn is_undoable(&self) -> bool {
        true
    }

    fn into_undoable(self: Box<Self>) -> Option<Box<dyn UndoableCommand>> {
        Some(self)
    }
}

impl UndoableCommand for ClearCommand {
    fn undo(&mut self, state: &mut StateContext) -> CommandOutcome {
        let count = self.cleared.len();
        state.model.replace_all(std::mem::take(&mut self.cleared));
        state.sync_categories();
        Ok(CommandResult::new(format!("Restored {} tasks", count)))
    }

    fn redo(&mut self, state: &mut StateContext) -> CommandOutcome {
        self.apply(state)
    }

    fn description(&self) -> String {
        Command::description(self)
    }
}
