//! The two histories kept by the executor.
//!
//! `CommandHistory` remembers what the user typed, whether or not it worked,
//! so it can be recalled. `UndoCommandHistory` remembers what changed state,
//! so it can be reversed. Neither knows about the other.

use crate::commands::{Command, CommandOutcome, StateContext, UndoableCommand};
use std::collections::VecDeque;
use twodo_core::CommandError;

/// Append-only log of raw input.
#[derive(Debug, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    limit: Option<usize>,
}

impl CommandHistory {
    /// Create an unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history that keeps at most `limit` entries, dropping the oldest.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Record input exactly as typed.
    pub fn append(&mut self, raw_input: &str) {
        if self.limit == Some(0) {
            return;
        }
        self.entries.push_back(raw_input.to_string());
        if let Some(limit) = self.limit {
            while self.entries.len() > limit {
                self.entries.pop_front();
            }
        }
    }

    /// Snapshot of every entry, oldest first.
    pub fn get_history(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Manages undo/redo of executed commands.
///
/// Only commands that succeeded and declare themselves undoable are recorded.
/// Recording a new command invalidates everything that could be redone.
pub struct UndoCommandHistory {
    /// Most recent = back of deque.
    undo_stack: VecDeque<Box<dyn UndoableCommand>>,

    /// Most recent = back of deque.
    redo_stack: VecDeque<Box<dyn UndoableCommand>>,

    /// Oldest undo entries are evicted beyond this depth.
    limit: usize,
}

impl UndoCommandHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            limit,
        }
    }

    /// Keep an executed command for undo if it supports it.
    ///
    /// # Panics
    ///
    /// If the command reports itself undoable but cannot hand over its undo
    /// capability. That is a broken command implementation, not bad input.
    pub fn record_executed(&mut self, command: Box<dyn Command>) {
        if !command.is_undoable() {
            return;
        }
        let description = command.description();
        let Some(command) = command.into_undoable() else {
            panic!("command '{description}' is undoable but provided no undo implementation");
        };
        if self.limit == 0 {
            return;
        }

        tracing::debug!("Recording for undo: {}", description);
        self.undo_stack.push_back(command);
        // Any new action clears the redo history
        self.redo_stack.clear();

        while self.undo_stack.len() > self.limit {
            if let Some(evicted) = self.undo_stack.pop_front() {
                tracing::debug!("Undo limit reached, dropping: {}", evicted.description());
            }
        }
    }

    /// Reverse the most recent command and make it available for redo.
    ///
    /// A command whose reversal fails stays on the undo stack.
    pub fn undo(&mut self, state: &mut StateContext) -> CommandOutcome {
        let mut command = self.undo_stack.pop_back().ok_or(CommandError::NothingToUndo)?;
        tracing::debug!("Undoing: {}", command.description());
        match command.undo(state) {
            Ok(result) => {
                self.redo_stack.push_back(command);
                Ok(result)
            }
            Err(e) => {
                self.undo_stack.push_back(command);
                Err(e)
            }
        }
    }

    /// Reapply the most recently undone command.
    ///
    /// A command whose reapplication fails stays on the redo stack.
    pub fn redo(&mut self, state: &mut StateContext) -> CommandOutcome {
        let mut command = self.redo_stack.pop_back().ok_or(CommandError::NothingToRedo)?;
        tracing::debug!("Redoing: {}", command.description());
        match command.redo(state) {
            Ok(result) => {
                self.undo_stack.push_back(command);
                Ok(result)
            }
            Err(e) => {
                self.redo_stack.push_back(command);
                Err(e)
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoCommandHistory {
    fn default() -> Self {
        Self::new(twodo_core::AppConfig::default().undo_limit)
    }
}

impl std::fmt::Debug for UndoCommandHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoCommandHistory")
            .field("undo_depth", &self.undo_depth())
            .field("redo_depth", &self.redo_depth())
            .field("limit", &self.limit)
            .finish()
    }
}
