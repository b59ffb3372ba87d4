mod simulated;

pub use simulated::SimulatedPin;

use calefaccion_embedded::{MotionController, Polarity, Result};

use crate::configs::Relay;

pub type SimulatedController = MotionController<SimulatedPin, SimulatedPin>;

/// Builds a controller over in-memory pins numbered as configured.
///
/// Both channels are driven off before this returns.
pub fn simulated_controller(relay: &Relay) -> Result<SimulatedController> {
    let up = SimulatedPin::new(relay.up.pin);
    let down = SimulatedPin::new(relay.down.pin);

    tracing::info!(
        up = up.number(),
        up_active_low = relay.up.active_low,
        down = down.number(),
        down_active_low = relay.down.active_low,
        "driving simulated relay outputs"
    );

    MotionController::from_pins(
        up,
        Polarity::from_active_low(relay.up.active_low),
        down,
        Polarity::from_active_low(relay.down.active_low),
    )
}
