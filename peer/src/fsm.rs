//! Loop State Machine
//!
//! A peer starts without a ball and keeps asking for one until a snapshot
//! arrives or it serves one itself. Once active it stays active until the
//! view is torn down.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Loop states
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Unseeded,
    Active,
    Stopped,
}

/// Actions that trigger state transitions
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    BallReceived,
    BallServed,
    Teardown,
}

/// Result of a state transition
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone)]
pub struct TransitionResult {
    success: bool,
    from_state: LoopState,
    to_state: LoopState,
    action: LoopAction,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl TransitionResult {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn success(&self) -> bool {
        self.success
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    #[allow(clippy::wrong_self_convention)]
    pub fn from_state(&self) -> LoopState {
        self.from_state
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn to_state(&self) -> LoopState {
        self.to_state
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn action(&self) -> LoopAction {
        self.action
    }

    /// Successful and actually changed state
    pub fn entered(&self) -> bool {
        self.success && self.from_state != self.to_state
    }
}

#[derive(Debug, Clone)]
pub struct LoopFsm {
    state: LoopState,
}

impl LoopFsm {
    pub fn new() -> Self {
        Self {
            state: LoopState::Unseeded,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn state_string(&self) -> String {
        format!("{:?}", self.state)
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: LoopAction) -> TransitionResult {
        let from_state = self.state;

        match self.get_next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn get_next_state(&self, action: LoopAction) -> Option<LoopState> {
        match (self.state, action) {
            // From Unseeded
            (LoopState::Unseeded, LoopAction::BallReceived) => Some(LoopState::Active),
            (LoopState::Unseeded, LoopAction::BallServed) => Some(LoopState::Active),
            (LoopState::Unseeded, LoopAction::Teardown) => Some(LoopState::Stopped),

            // From Active: later snapshots keep it active
            (LoopState::Active, LoopAction::BallReceived) => Some(LoopState::Active),
            (LoopState::Active, LoopAction::BallServed) => Some(LoopState::Active),
            (LoopState::Active, LoopAction::Teardown) => Some(LoopState::Stopped),

            // Stopped is terminal
            _ => None,
        }
    }

    pub fn is_unseeded(&self) -> bool {
        self.state == LoopState::Unseeded
    }

    pub fn is_active(&self) -> bool {
        self.state == LoopState::Active
    }

    pub fn is_stopped(&self) -> bool {
        self.state == LoopState::Stopped
    }
}

impl Default for LoopFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = LoopFsm::new();
        assert_eq!(fsm.state(), LoopState::Unseeded);
        assert_eq!(fsm.state_string(), "Unseeded");
    }

    #[test]
    fn test_ball_activates() {
        let mut fsm = LoopFsm::new();
        let result = fsm.transition(LoopAction::BallReceived);
        assert!(result.success);
        assert!(result.entered());
        assert_eq!(fsm.state(), LoopState::Active);
    }

    #[test]
    fn test_serve_activates() {
        let mut fsm = LoopFsm::new();
        fsm.transition(LoopAction::BallServed);
        assert!(fsm.is_active());
    }

    #[test]
    fn test_later_snapshot_stays_active() {
        let mut fsm = LoopFsm::new();
        fsm.transition(LoopAction::BallReceived);
        let result = fsm.transition(LoopAction::BallReceived);
        assert!(result.success);
        assert!(!result.entered());
        assert!(fsm.is_active());
    }

    #[test]
    fn test_stopped_is_terminal() {
        let mut fsm = LoopFsm::new();
        fsm.transition(LoopAction::Teardown);
        assert!(fsm.is_stopped());

        let result = fsm.transition(LoopAction::BallReceived);
        assert!(!result.success);
        assert!(!fsm.transition(LoopAction::BallServed).success());
        assert_eq!(fsm.state(), LoopState::Stopped);
    }
}
