mod channel;
mod polarity;

pub use channel::RelayChannel;
pub use polarity::{Polarity, resolve_energized, resolve_level};

/// Direction of motion a relay channel is wired to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Up,
    Down,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Up => "up",
            Role::Down => "down",
        }
    }
}
