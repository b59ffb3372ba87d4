use embedded_hal::digital::{PinState, StatefulOutputPin};

use crate::{Error, Result};

use super::{Polarity, Role, resolve_energized, resolve_level};

/// One relay output: a pin plus the wiring polarity it was configured with.
pub struct RelayChannel<Pin>
where
    Pin: StatefulOutputPin,
{
    role: Role,
    pin: Pin,
    polarity: Polarity,
}

impl<Pin> RelayChannel<Pin>
where
    Pin: StatefulOutputPin,
{
    /// Takes ownership of the pin and immediately drives it to the off level.
    pub fn configure(role: Role, pin: Pin, polarity: Polarity) -> Result<Self> {
        let mut channel = Self {
            role,
            pin,
            polarity,
        };

        channel.write(false)?;

        Ok(channel)
    }

    pub fn write(&mut self, energized: bool) -> Result<()> {
        let level = resolve_level(self.polarity, energized);

        log::debug!(
            "relay {}: energized={} level={:?}",
            self.role.as_str(),
            energized,
            level
        );

        self.pin.set_state(level).map_err(|_| Error::PinFault)
    }

    /// Reads the level currently driven on the pin, resolved through polarity.
    pub fn read(&mut self) -> Result<bool> {
        let high = self.pin.is_set_high().map_err(|_| Error::PinFault)?;

        Ok(resolve_energized(self.polarity, PinState::from(high)))
    }

    #[cfg(test)]
    pub(crate) fn pin(&self) -> &Pin {
        &self.pin
    }
}
