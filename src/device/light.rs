// Light - the reference receiver implementation

use crate::device::switchable::{SwitchState, Switchable};

/// A toggle-able light.
///
/// The state changes only through the [`Switchable`] operations a command
/// invokes on it. Transitions are logged as human-readable progress lines;
/// correctness never depends on the log output.
#[derive(Debug, Default)]
pub struct Light {
    state: SwitchState,
}

impl Light {
    /// Create a new light, initially Off.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Switchable for Light {
    fn activate(&mut self) {
        self.state = SwitchState::On;
        log::info!("Turning light ON");
    }

    fn deactivate(&mut self) {
        self.state = SwitchState::Off;
        log::info!("Turning light OFF");
    }

    fn describe_state(&self) -> SwitchState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_starts_off() {
        let light = Light::new();
        assert_eq!(light.describe_state(), SwitchState::Off);
    }

    #[test]
    fn test_activate_then_deactivate() {
        let mut light = Light::new();
        light.activate();
        assert_eq!(light.describe_state(), SwitchState::On);
        light.deactivate();
        assert_eq!(light.describe_state(), SwitchState::Off);
    }

    #[test]
    fn test_transitions_are_idempotent() {
        let mut light = Light::new();
        light.activate();
        light.activate();
        assert_eq!(light.describe_state(), SwitchState::On);
        light.deactivate();
        light.deactivate();
        assert_eq!(light.describe_state(), SwitchState::Off);
    }

    #[test]
    fn test_describe_state_does_not_mutate() {
        let mut light = Light::new();
        light.activate();
        let _ = light.describe_state();
        let _ = light.describe_state();
        assert_eq!(light.describe_state(), SwitchState::On);
    }
}
