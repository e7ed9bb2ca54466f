// History - bounded undo/redo stacks

use crate::command::trait_def::Command;
use std::collections::VecDeque;
use thiserror::Error;

/// Default maximum number of commands to keep in history
const DEFAULT_MAX_HISTORY: usize = 100;

/// Errors from history navigation.
///
/// Command execution and undo themselves define no failure condition; the
/// only signaled errors are navigation past either end of the history.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

/// Last-in-first-out undo/redo over executed commands.
///
/// The history maintains two stacks:
/// - Undo stack: commands that have been executed and can be undone
/// - Redo stack: commands that have been undone and can be redone
///
/// When a new command is executed it is pushed onto the undo stack and the
/// redo stack is cleared, since the session is on a new timeline.
///
/// # Memory Management
/// The undo stack is bounded to prevent unbounded growth; when the limit is
/// reached the oldest command is dropped.
pub struct History {
    /// Commands that can be undone (most recent at the back)
    undo_stack: VecDeque<Box<dyn Command>>,

    /// Commands that can be redone (most recent at the back)
    redo_stack: VecDeque<Box<dyn Command>>,

    /// Maximum number of commands to keep in history
    max_history: usize,
}

impl History {
    /// Create a new history with the default limit.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_HISTORY)
    }

    /// Create a new history with a custom limit.
    pub fn with_capacity(max_history: usize) -> Self {
        Self {
            undo_stack: VecDeque::with_capacity(max_history),
            redo_stack: VecDeque::with_capacity(max_history),
            max_history,
        }
    }

    /// Execute a command and record it for undo.
    ///
    /// Clears the redo stack and trims the oldest entry once the history
    /// limit is exceeded. Execution itself cannot fail; an unbound command
    /// is recorded like any other and undoing it is also a no-op.
    pub fn execute(&mut self, mut command: Box<dyn Command>) {
        command.execute();

        self.undo_stack.push_back(command);
        self.redo_stack.clear();

        if self.undo_stack.len() > self.max_history {
            self.undo_stack.pop_front();
        }
    }

    /// Undo the most recent command.
    ///
    /// Pops it from the undo stack, undoes it, moves it to the redo stack
    /// and returns its description.
    pub fn undo(&mut self) -> Result<String, HistoryError> {
        let mut command = self
            .undo_stack
            .pop_back()
            .ok_or(HistoryError::NothingToUndo)?;

        let description = command.description();
        command.undo();
        self.redo_stack.push_back(command);

        log::debug!("Undid: {}", description);
        Ok(description)
    }

    /// Redo the most recently undone command.
    ///
    /// Pops it from the redo stack, re-executes it, moves it back to the
    /// undo stack and returns its description.
    pub fn redo(&mut self) -> Result<String, HistoryError> {
        let mut command = self
            .redo_stack
            .pop_back()
            .ok_or(HistoryError::NothingToRedo)?;

        let description = command.description();
        command.execute();
        self.undo_stack.push_back(command);

        log::debug!("Redid: {}", description);
        Ok(description)
    }

    /// Check if there are commands that can be undone.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if there are commands that can be redone.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Description of the command that would be undone next.
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(|cmd| cmd.description())
    }

    /// Description of the command that would be redone next.
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.back().map(|cmd| cmd.description())
    }

    /// Clear all command history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Number of commands in the undo stack.
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of commands in the redo stack.
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
