//! State machine definition

use super::events::Event;

/// Controller states
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerState {
    /// Power applied, nothing sent yet
    #[default]
    Uninitialized,
    /// Power-up sequence in progress
    Booting,
    /// Accepting display commands and data
    Ready,
}

impl ControllerState {
    /// Check if display operations are allowed
    pub fn is_ready(&self) -> bool {
        matches!(self, ControllerState::Ready)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use ControllerState::*;
        use Event::*;

        match (self, event) {
            // Re-running init from Ready starts over
            (Uninitialized, InitStarted) | (Ready, InitStarted) => Booting,

            (Booting, InitCompleted) => Ready,
            (Booting, InitFailed) => Uninitialized,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_up_flow() {
        let state = ControllerState::default();
        assert_eq!(state, ControllerState::Uninitialized);

        let booting = state.transition(Event::InitStarted);
        assert_eq!(booting, ControllerState::Booting);
        assert!(!booting.is_ready());

        let ready = booting.transition(Event::InitCompleted);
        assert_eq!(ready, ControllerState::Ready);
        assert!(ready.is_ready());
    }

    #[test]
    fn test_reinit_from_ready() {
        let state = ControllerState::Ready.transition(Event::InitStarted);
        assert_eq!(state, ControllerState::Booting);
    }

    #[test]
    fn test_failure_returns_to_uninitialized() {
        let state = ControllerState::Booting.transition(Event::InitFailed);
        assert_eq!(state, ControllerState::Uninitialized);
    }

    #[test]
    fn test_ready_only_from_booting() {
        let states = [ControllerState::Uninitialized, ControllerState::Ready];

        for state in states {
            assert_eq!(state.transition(Event::InitCompleted), state);
            assert_eq!(state.transition(Event::InitFailed), state);
        }
    }

    #[test]
    fn test_booting_ignores_restart() {
        let state = ControllerState::Booting.transition(Event::InitStarted);
        assert_eq!(state, ControllerState::Booting);
    }
}
