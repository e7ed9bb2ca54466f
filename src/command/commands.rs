// Concrete command implementations

use crate::command::trait_def::Command;
use crate::device::{DeviceHandle, SwitchState, Switchable};

/// Command whose forward action activates its receiver.
///
/// `execute()` activates, `undo()` deactivates. The receiver is shared, not
/// owned; it may outlive this command and be targeted by other commands at
/// the same time.
pub struct SwitchOn<T: Switchable> {
    device: Option<DeviceHandle<T>>,
}

impl<T: Switchable> SwitchOn<T> {
    /// Create a command bound to the given receiver.
    pub fn new(device: DeviceHandle<T>) -> Self {
        Self {
            device: Some(device),
        }
    }

    /// Create a command with no receiver.
    ///
    /// All operations are no-ops until [`bind`](SwitchOn::bind) wires one up.
    pub fn unbound() -> Self {
        Self { device: None }
    }

    /// Bind (or rebind) the receiver this command targets.
    pub fn bind(&mut self, device: DeviceHandle<T>) {
        self.device = Some(device);
    }
}

impl<T: Switchable> Command for SwitchOn<T> {
    fn execute(&mut self) {
        if let Some(device) = &self.device {
            if let Ok(mut device) = device.lock() {
                device.activate();
            }
        }
    }

    fn undo(&mut self) {
        if let Some(device) = &self.device {
            if let Ok(mut device) = device.lock() {
                device.deactivate();
            }
        }
    }

    fn show(&self) -> Option<SwitchState> {
        let device = self.device.as_ref()?;
        let state = device.lock().ok()?.describe_state();
        Some(state)
    }

    fn description(&self) -> String {
        "Switch ON".to_string()
    }
}

/// Command whose forward action deactivates its receiver.
///
/// The mirror of [`SwitchOn`]: `execute()` deactivates, `undo()` activates.
pub struct SwitchOff<T: Switchable> {
    device: Option<DeviceHandle<T>>,
}

impl<T: Switchable> SwitchOff<T> {
    /// Create a command bound to the given receiver.
    pub fn new(device: DeviceHandle<T>) -> Self {
        Self {
            device: Some(device),
        }
    }

    /// Create a command with no receiver.
    ///
    /// All operations are no-ops until [`bind`](SwitchOff::bind) wires one up.
    pub fn unbound() -> Self {
        Self { device: None }
    }

    /// Bind (or rebind) the receiver this command targets.
    pub fn bind(&mut self, device: DeviceHandle<T>) {
        self.device = Some(device);
    }
}

impl<T: Switchable> Command for SwitchOff<T> {
    fn execute(&mut self) {
        if let Some(device) = &self.device {
            if let Ok(mut device) = device.lock() {
                device.deactivate();
            }
        }
    }

    fn undo(&mut self) {
        if let Some(device) = &self.device {
            if let Ok(mut device) = device.lock() {
                device.activate();
            }
        }
    }

    fn show(&self) -> Option<SwitchState> {
        let device = self.device.as_ref()?;
        let state = device.lock().ok()?.describe_state();
        Some(state)
    }

    fn description(&self) -> String {
        "Switch OFF".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::{Light, share};

    #[test]
    fn test_execute_then_undo_restores_state() {
        let light = share(Light::new());
        let mut on = SwitchOn::new(light.clone());

        let before = light.lock().unwrap().describe_state();
        on.execute();
        on.undo();
        assert_eq!(light.lock().unwrap().describe_state(), before);
    }

    #[test]
    fn test_undo_then_execute_restores_state() {
        let light = share(Light::new());
        let mut off = SwitchOff::new(light.clone());

        let before = light.lock().unwrap().describe_state();
        off.undo();
        off.execute();
        assert_eq!(light.lock().unwrap().describe_state(), before);
    }

    #[test]
    fn test_execute_is_idempotent() {
        let light = share(Light::new());
        let mut on = SwitchOn::new(light.clone());

        on.execute();
        on.execute();
        assert_eq!(on.show(), Some(SwitchState::On));

        let mut off = SwitchOff::new(light.clone());
        off.execute();
        off.execute();
        assert_eq!(off.show(), Some(SwitchState::Off));
    }

    #[test]
    fn test_unbound_command_is_a_no_op() {
        let mut on = SwitchOn::<Light>::unbound();
        on.execute();
        on.undo();
        assert_eq!(on.show(), None);

        let mut off = SwitchOff::<Light>::unbound();
        off.execute();
        off.undo();
        assert_eq!(off.show(), None);
    }

    #[test]
    fn test_bind_makes_command_effective() {
        let light = share(Light::new());
        let mut on = SwitchOn::unbound();

        on.execute();
        assert_eq!(light.lock().unwrap().describe_state(), SwitchState::Off);

        on.bind(light.clone());
        on.execute();
        assert_eq!(light.lock().unwrap().describe_state(), SwitchState::On);
    }

    #[test]
    fn test_two_commands_share_one_receiver() {
        let light = share(Light::new());
        let mut on = SwitchOn::new(light.clone());
        let mut off = SwitchOff::new(light.clone());

        on.execute();
        assert_eq!(off.show(), Some(SwitchState::On));
        off.execute();
        assert_eq!(on.show(), Some(SwitchState::Off));
    }

    #[test]
    fn test_show_does_not_mutate() {
        let light = share(Light::new());
        let mut on = SwitchOn::new(light.clone());
        on.execute();

        let _ = on.show();
        let _ = on.show();
        assert_eq!(light.lock().unwrap().describe_state(), SwitchState::On);
    }
}
