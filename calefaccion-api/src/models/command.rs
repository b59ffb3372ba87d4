use core::fmt;

use serde::{Deserialize, Serialize};

use super::StopTarget;

/// A single request against the actuator, derived from one HTTP call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Health,
    QueryState,
    Up,
    Down,
    Stop(StopTarget),
}

impl Command {
    /// The action reported back to the caller, for commands that move relays.
    pub fn action(&self) -> Option<Action> {
        match self {
            Command::Up => Some(Action::Up),
            Command::Down => Some(Action::Down),
            Command::Stop(_) => Some(Action::Stop),
            Command::Health | Command::QueryState => None,
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            Command::Health => "health",
            Command::QueryState => "query-state",
            Command::Up => "up",
            Command::Down => "down",
            Command::Stop(_) => "stop",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Stop(target) => write!(f, "stop(relay={})", target),
            other => f.write_str(other.verb()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up,
    Down,
    Stop,
}
