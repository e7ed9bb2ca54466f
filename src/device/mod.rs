// Receiver side - the capability interface commands target, plus the
// concrete devices shipped with the crate.
//
// Receivers are created by the caller and live independently of any command
// bound to them; one receiver may be targeted by several commands.

pub mod light;
pub mod switchable;

pub use light::Light;
pub use switchable::{SwitchState, Switchable};

use std::sync::{Arc, Mutex};

/// Shared handle to a receiver.
///
/// Every command bound to one receiver observes the same mutable cell.
/// Wrapped in `Arc<Mutex<>>` so commands stay `Send` and the receiver can
/// outlive any command referencing it.
pub type DeviceHandle<T> = Arc<Mutex<T>>;

/// Wrap a receiver in a shareable handle.
pub fn share<T: Switchable>(device: T) -> DeviceHandle<T> {
    Arc::new(Mutex::new(device))
}
