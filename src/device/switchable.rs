// Switchable - the capability interface a command requires from a receiver

use serde::{Deserialize, Serialize};
use std::fmt;

/// Observable state of a switchable receiver.
///
/// The state space is closed: every transition is total and idempotent,
/// there is no error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SwitchState {
    #[default]
    Off,
    On,
}

impl SwitchState {
    /// The other state.
    pub fn toggled(self) -> Self {
        match self {
            SwitchState::Off => SwitchState::On,
            SwitchState::On => SwitchState::Off,
        }
    }
}

impl fmt::Display for SwitchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SwitchState::Off => "OFF",
            SwitchState::On => "ON",
        };
        write!(f, "{}", label)
    }
}

/// Capability interface for receivers a command can target.
///
/// Any object exposing these three operations can be driven by the command
/// side without modification. The command side never constructs or destroys
/// a receiver, it only invokes these operations through a shared handle.
pub trait Switchable: Send {
    /// Transition to the On state. Idempotent when already On.
    fn activate(&mut self);

    /// Transition to the Off state. Idempotent when already Off.
    fn deactivate(&mut self);

    /// Report the current state. Never mutates.
    fn describe_state(&self) -> SwitchState;
}
