use embedded_hal::digital::StatefulOutputPin;

use crate::relay::{Polarity, RelayChannel, Role};
use crate::{Error, Result};

use super::{Actuator, MotionState, StopTarget};

/// Owns both relay channels and guarantees they are never energized together.
///
/// The opposite channel is always released before a direction is energized,
/// whatever the controller believes the current state is, and the result of
/// every transition is read back from the pins before it is reported.
pub struct MotionController<UpPin, DownPin>
where
    UpPin: StatefulOutputPin,
    DownPin: StatefulOutputPin,
{
    up: RelayChannel<UpPin>,
    down: RelayChannel<DownPin>,
    state: MotionState,
}

impl<UpPin, DownPin> MotionController<UpPin, DownPin>
where
    UpPin: StatefulOutputPin,
    DownPin: StatefulOutputPin,
{
    /// Stops both channels before handing the controller out.
    pub fn new(up: RelayChannel<UpPin>, down: RelayChannel<DownPin>) -> Result<Self> {
        let mut controller = Self {
            up,
            down,
            state: MotionState::Stopped,
        };

        controller.stop(StopTarget::Both)?;

        Ok(controller)
    }

    pub fn from_pins(
        up_pin: UpPin,
        up_polarity: Polarity,
        down_pin: DownPin,
        down_polarity: Polarity,
    ) -> Result<Self> {
        let up = RelayChannel::configure(Role::Up, up_pin, up_polarity)?;
        let down = RelayChannel::configure(Role::Down, down_pin, down_polarity)?;

        Self::new(up, down)
    }

    /// Energized flags of the (up, down) channels as currently driven.
    pub fn channels(&mut self) -> Result<(bool, bool)> {
        Ok((self.up.read()?, self.down.read()?))
    }

    fn release(&mut self) -> Result<()> {
        let up = self.up.write(false);
        let down = self.down.write(false);

        up.and(down)
    }

    fn abort(&mut self, err: Error) -> Error {
        log::warn!("relay transition aborted: {}", err);

        if let Err(release_err) = self.release() {
            log::error!("failed to release relays: {}", release_err);
        }
        self.state = MotionState::Stopped;

        err
    }

    /// Derives the state from the pins. An unreadable or contradictory
    /// read-back releases both channels.
    fn settle(&mut self) -> Result<MotionState> {
        let (up, down) = match self.channels() {
            Ok(channels) => channels,
            Err(err) => return Err(self.abort(err)),
        };

        match MotionState::from_channels(up, down) {
            Some(state) => {
                if state != self.state {
                    log::info!("motion: {} -> {}", self.state, state);
                }
                self.state = state;
                Ok(state)
            }
            None => Err(self.abort(Error::InterlockViolation)),
        }
    }
}

impl<UpPin, DownPin> Actuator for MotionController<UpPin, DownPin>
where
    UpPin: StatefulOutputPin,
    DownPin: StatefulOutputPin,
{
    fn move_up(&mut self) -> Result<MotionState> {
        self.down.write(false)?;
        if let Err(err) = self.up.write(true) {
            return Err(self.abort(err));
        }

        self.settle()
    }

    fn move_down(&mut self) -> Result<MotionState> {
        self.up.write(false)?;
        if let Err(err) = self.down.write(true) {
            return Err(self.abort(err));
        }

        self.settle()
    }

    fn stop(&mut self, target: StopTarget) -> Result<MotionState> {
        match target {
            StopTarget::Up => self.up.write(false)?,
            StopTarget::Down => self.down.write(false)?,
            StopTarget::Both => self.release()?,
        }

        self.settle()
    }

    fn state(&self) -> MotionState {
        self.state
    }
}
