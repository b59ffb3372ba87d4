use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A GPIO write or read reported a failure
    PinFault,
    /// Both relay channels were observed energized at once
    InterlockViolation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PinFault => write!(f, "Relay pin fault"),
            Error::InterlockViolation => write!(f, "Both relay channels energized"),
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
