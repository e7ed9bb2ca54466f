// CommandQueue - the invoker

use crate::command::trait_def::Command;

/// Ordered invoker over boxed commands.
///
/// Commands are stored in insertion order; duplicates are permitted and
/// there is no capacity limit. `execute_all` and `undo_all` both traverse
/// the SAME front-to-back order: the queue replays a fixed batch in a
/// stable order in either direction. This is not last-in-first-out undo;
/// for conventional LIFO undo of an interactive session use
/// [`History`](crate::command::History) instead.
///
/// The queue owns its commands but never the receivers they target.
#[derive(Default)]
pub struct CommandQueue {
    commands: Vec<Box<dyn Command>>,
}

impl CommandQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command to the end of the queue. Always succeeds.
    pub fn add(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Execute every queued command front to back, reporting each state.
    ///
    /// Fully sequential, no partial-failure skipping: an unbound command is
    /// a silent no-op and processing continues with the next entry.
    pub fn execute_all(&mut self) {
        log::debug!("Executing {} queued commands", self.commands.len());
        for command in &mut self.commands {
            command.execute();
            report(command.as_ref());
        }
    }

    /// Undo every queued command in the same front-to-back order.
    pub fn undo_all(&mut self) {
        log::debug!("Undoing {} queued commands", self.commands.len());
        for command in &mut self.commands {
            command.undo();
            report(command.as_ref());
        }
    }

    /// Number of queued commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether the queue holds no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn report(command: &dyn Command) {
    match command.show() {
        Some(state) => log::info!("{}: current state {}", command.description(), state),
        None => log::warn!("{}: no receiver bound", command.description()),
    }
}
