use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::Response;
use embedded_hal::digital::PinState;
use serde_json::Value;

use calefaccion_embedded::{MotionController, Polarity, resolve_energized};
use calefaccion_server::app::create_app;
use calefaccion_server::configs::{Auth, Logger, Relay, RelayPin, Server, Settings};
use calefaccion_server::gpio::SimulatedPin;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "changeme";

pub struct MockApp {
    pub router: Router,
    pub up: SimulatedPin,
    pub down: SimulatedPin,
}

impl MockApp {
    pub fn new() -> Self {
        Self::build(false)
    }

    pub fn with_auth() -> Self {
        Self::build(true)
    }

    fn build(auth_enabled: bool) -> Self {
        let settings = settings(auth_enabled);

        let up = SimulatedPin::new(settings.relay.up.pin);
        let down = SimulatedPin::new(settings.relay.down.pin);

        let controller = MotionController::from_pins(
            up.clone(),
            Polarity::ActiveLow,
            down.clone(),
            Polarity::ActiveLow,
        )
        .unwrap();

        Self {
            router: create_app(&settings, controller),
            up,
            down,
        }
    }

    /// Energized flags of the (up, down) relays, resolved through polarity.
    pub fn energized(&self) -> (bool, bool) {
        let resolve = |pin: &SimulatedPin| {
            resolve_energized(Polarity::ActiveLow, PinState::from(pin.is_high()))
        };

        (resolve(&self.up), resolve(&self.down))
    }
}

pub fn settings(auth_enabled: bool) -> Settings {
    Settings {
        server: Server {
            host: String::from("127.0.0.1"),
            port: 0,
        },
        logger: Logger {
            level: String::from("debug"),
        },
        relay: Relay {
            up: RelayPin {
                pin: 26,
                active_low: true,
            },
            down: RelayPin {
                pin: 27,
                active_low: true,
            },
        },
        auth: Auth {
            enabled: auth_enabled,
            username: String::from(USERNAME),
            password: String::from(PASSWORD),
        },
    }
}

pub async fn read_body(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn read_json(response: Response<Body>) -> Value {
    serde_json::from_str(&read_body(response).await).unwrap()
}
