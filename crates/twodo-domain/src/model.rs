//! The task list that commands read and mutate.
//!
//! Users address tasks by their 1-based position in the *displayed* view,
//! which is filtered and sorted. Commands resolve that index to a `TaskId`
//! once, so undo and redo keep working after the view changes.

use crate::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use twodo_core::CommandError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskFilter {
    All,
    #[default]
    Incomplete,
    Completed,
    Keywords(Vec<String>),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Incomplete => !task.completed,
            TaskFilter::Completed => task.completed,
            TaskFilter::Keywords(keywords) => keywords.iter().any(|k| task.matches_keyword(k)),
        }
    }
}

/// Incomplete first, then earliest deadline end (none last), then name.
fn display_order(a: &Task, b: &Task) -> Ordering {
    a.completed
        .cmp(&b.completed)
        .then_with(|| match (&a.deadline, &b.deadline) {
            (Some(x), Some(y)) => x.end.cmp(&y.end),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| a.name.cmp(&b.name))
}

#[derive(Debug, Clone, Default)]
pub struct TaskModel {
    tasks: Vec<Task>,
    filter: TaskFilter,
}

impl TaskModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            filter: TaskFilter::default(),
        }
    }

    /// All tasks in insertion order, ignoring the filter.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Tasks as the user sees them.
    pub fn filtered_view(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().filter(|t| self.filter.matches(t)).collect();
        view.sort_by(|a, b| display_order(a, b));
        view
    }

    /// Look up a task by its 1-based position in the filtered view.
    pub fn get_by_index(&self, index: usize) -> Result<&Task, CommandError> {
        index
            .checked_sub(1)
            .and_then(|i| self.filtered_view().get(i).copied())
            .ok_or(CommandError::InvalidIndex(index))
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn add(&mut self, task: Task) -> Result<(), CommandError> {
        if self.tasks.iter().any(|t| t.is_same_task(&task)) {
            return Err(CommandError::DuplicateTask);
        }
        self.tasks.push(task);
        Ok(())
    }

    /// Put a task back at a storage position, clamped to the current length.
    pub fn insert(&mut self, position: usize, task: Task) {
        let position = position.min(self.tasks.len());
        self.tasks.insert(position, task);
    }

    /// Remove a task, returning its storage position and the task itself.
    pub fn remove(&mut self, id: TaskId) -> Option<(usize, Task)> {
        let position = self.tasks.iter().position(|t| t.id == id)?;
        Some((position, self.tasks.remove(position)))
    }

    /// Replace the task with the same id, returning the previous version.
    pub fn update(&mut self, task: Task) -> Result<Task, CommandError> {
        if self
            .tasks
            .iter()
            .any(|t| t.id != task.id && t.is_same_task(&task))
        {
            return Err(CommandError::DuplicateTask);
        }
        let slot = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task.id)
            .ok_or_else(|| CommandError::Failed(format!("Task {} no longer exists", task.id)))?;
        Ok(std::mem::replace(slot, task))
    }

    /// Remove every task, returning them in storage order.
    pub fn clear(&mut self) -> Vec<Task> {
        std::mem::take(&mut self.tasks)
    }

    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }
}
