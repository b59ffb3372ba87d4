use embedded_hal::digital::PinState;

/// Wiring convention of a relay board input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Polarity {
    /// Driving the pin high energizes the relay
    ActiveHigh,
    /// Driving the pin low energizes the relay
    #[default]
    ActiveLow,
}

impl Polarity {
    pub fn from_active_low(active_low: bool) -> Self {
        if active_low {
            Polarity::ActiveLow
        } else {
            Polarity::ActiveHigh
        }
    }

    pub fn is_active_low(&self) -> bool {
        matches!(self, Polarity::ActiveLow)
    }
}

/// Physical pin level that puts a relay in the wanted logical state.
pub fn resolve_level(polarity: Polarity, energized: bool) -> PinState {
    PinState::from(energized ^ polarity.is_active_low())
}

/// Inverse of [`resolve_level`]: logical state for an observed pin level.
pub fn resolve_energized(polarity: Polarity, level: PinState) -> bool {
    (level == PinState::High) ^ polarity.is_active_low()
}
