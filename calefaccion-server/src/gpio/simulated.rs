use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

/// Digital output kept in memory, for hosts without GPIO.
///
/// Clones observe the same level.
#[derive(Debug, Clone)]
pub struct SimulatedPin {
    number: u8,
    level: Arc<AtomicBool>,
}

impl SimulatedPin {
    pub fn new(number: u8) -> Self {
        Self {
            number,
            level: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn is_high(&self) -> bool {
        self.level.load(Ordering::SeqCst)
    }

    fn drive(&mut self, high: bool) {
        let previous = self.level.swap(high, Ordering::SeqCst);
        if previous != high {
            tracing::trace!(pin = self.number, high, "gpio level changed");
        }
    }
}

impl ErrorType for SimulatedPin {
    type Error = Infallible;
}

impl OutputPin for SimulatedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(true);
        Ok(())
    }
}

impl StatefulOutputPin for SimulatedPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(SimulatedPin::is_high(self))
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!SimulatedPin::is_high(self))
    }
}
