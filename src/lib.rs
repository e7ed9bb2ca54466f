// command_deck - Reversible-action execution engine
//
// A command is a bound, reversible unit of work over a shared receiver.
// The CommandQueue applies and reverses an ordered batch of commands;
// History provides last-in-first-out undo/redo over executed commands.

pub mod command;
pub mod device;

// Re-export commonly used types for convenience
pub use command::{Command, CommandQueue, History, HistoryError, SwitchOff, SwitchOn};
pub use device::{DeviceHandle, Light, SwitchState, Switchable};
