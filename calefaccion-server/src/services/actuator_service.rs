use calefaccion_api::models::{Command, MotionState};
use calefaccion_embedded::{Actuator, Result};
use tokio::sync::Mutex;

/// Serializes access to the actuator so commands are applied one at a time.
pub struct ActuatorService {
    actuator: Mutex<Box<dyn Actuator + Send>>,
}

impl ActuatorService {
    pub fn new<A>(actuator: A) -> Self
    where
        A: Actuator + Send + 'static,
    {
        Self {
            actuator: Mutex::new(Box::new(actuator)),
        }
    }

    pub async fn execute(&self, command: Command) -> Result<MotionState> {
        let mut actuator = self.actuator.lock().await;

        let state = actuator.execute(command)?;

        if command.action().is_some() {
            tracing::info!(command = %command, state = %state, "command applied");
        } else {
            tracing::debug!(command = %command, state = %state, "query served");
        }

        Ok(state)
    }
}
