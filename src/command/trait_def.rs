// Command trait definition

use crate::device::SwitchState;

/// Trait for reversible units of work against a bound receiver.
///
/// A command binds at most one receiver and hard-codes which direction is
/// forward and which is inverse at construction time; direction is not a
/// runtime parameter. `undo` must be the exact inverse of `execute` with
/// respect to the receiver's observable state: executing then undoing
/// returns the receiver to its pre-execute state.
///
/// A command constructed without a receiver is valid; its operations are
/// silent no-ops until a receiver is wired up. This is deliberate so a
/// command can be built before its receiver exists.
///
/// # Thread Safety
/// Commands must be `Send` as they may be moved between threads.
///
/// # Example
/// ```
/// use command_deck::{Command, Light, SwitchOn, SwitchState};
/// use command_deck::device;
///
/// let light = device::share(Light::new());
/// let mut on = SwitchOn::new(light.clone());
///
/// on.execute();
/// assert_eq!(on.show(), Some(SwitchState::On));
///
/// on.undo();
/// assert_eq!(on.show(), Some(SwitchState::Off));
/// ```
pub trait Command: Send {
    /// Apply the forward action to the bound receiver.
    ///
    /// Side effect only. No-op when no receiver is bound.
    fn execute(&mut self);

    /// Apply the exact inverse of the forward action.
    ///
    /// Same no-op policy as [`execute`](Command::execute) when unbound.
    fn undo(&mut self);

    /// Report the bound receiver's current state without mutating it.
    ///
    /// Returns `None` when no receiver is bound.
    fn show(&self) -> Option<SwitchState>;

    /// Human-readable label for the command.
    ///
    /// Used for progress logging and history display
    /// (e.g. "Undo: Switch ON").
    fn description(&self) -> String;
}
