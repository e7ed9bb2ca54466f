// Command pattern core
//
// Architecture:
// - Command trait: defines execute(), undo(), show(), description()
// - Concrete commands: SwitchOn, SwitchOff (direction fixed at construction)
// - CommandQueue: ordered invoker, applies and reverses a batch front to back
// - History: bounded last-in-first-out undo/redo stacks
//
// Commands do not own their receiver; they hold a shared DeviceHandle and
// stay no-ops until one is bound.

pub mod commands;
pub mod history;
pub mod queue;
pub mod trait_def;

pub use commands::{SwitchOff, SwitchOn};
pub use history::{History, HistoryError};
pub use queue::CommandQueue;
pub use trait_def::Command;
