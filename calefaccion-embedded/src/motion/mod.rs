mod controller;

pub use calefaccion_api::models::{Command, MotionState, StopTarget};
pub use controller::MotionController;

use crate::Result;

/// Something that can be driven up, down, or stopped.
///
/// Every operation returns the motion state observed after it was applied.
pub trait Actuator {
    fn move_up(&mut self) -> Result<MotionState>;

    fn move_down(&mut self) -> Result<MotionState>;

    fn stop(&mut self, target: StopTarget) -> Result<MotionState>;

    fn state(&self) -> MotionState;

    fn execute(&mut self, command: Command) -> Result<MotionState> {
        match command {
            Command::Up => self.move_up(),
            Command::Down => self.move_down(),
            Command::Stop(target) => self.stop(target),
            Command::Health | Command::QueryState => Ok(self.state()),
        }
    }
}
