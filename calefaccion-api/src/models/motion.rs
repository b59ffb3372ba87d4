use core::fmt;

use serde::{Deserialize, Serialize};

/// Intended direction of travel of the actuator.
///
/// There is no position feedback, so this reflects the last command that
/// was applied to the relays rather than a measured movement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MotionState {
    #[default]
    #[serde(rename = "stopped")]
    Stopped,
    #[serde(rename = "up")]
    MovingUp,
    #[serde(rename = "down")]
    MovingDown,
}

impl MotionState {
    /// Derives the state from the energized flags of the two channels.
    ///
    /// Returns `None` when both are energized, which is never a valid state.
    pub fn from_channels(up: bool, down: bool) -> Option<Self> {
        match (up, down) {
            (false, false) => Some(MotionState::Stopped),
            (true, false) => Some(MotionState::MovingUp),
            (false, true) => Some(MotionState::MovingDown),
            (true, true) => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MotionState::Stopped => "stopped",
            MotionState::MovingUp => "up",
            MotionState::MovingDown => "down",
        }
    }
}

impl fmt::Display for MotionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which channel(s) a stop command releases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopTarget {
    Up,
    Down,
    #[default]
    Both,
}

impl StopTarget {
    /// Lenient selector parsing: anything other than `up` or `down`,
    /// including a missing value, stops both channels.
    pub fn from_selector(value: Option<&str>) -> Self {
        match value {
            Some("up") => StopTarget::Up,
            Some("down") => StopTarget::Down,
            _ => StopTarget::Both,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StopTarget::Up => "up",
            StopTarget::Down => "down",
            StopTarget::Both => "both",
        }
    }
}

impl fmt::Display for StopTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
