use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::extract::State;
use axum::http::{Response, StatusCode};
use serde_json::Value;
use tokio::net::TcpListener;

use calefaccion_embedded::{MotionController, Polarity};
use calefaccion_proxy::configs::{Cors, Device, Logger, Server, Settings};
use calefaccion_server::configs as device_configs;
use calefaccion_server::gpio::SimulatedPin;

pub const ORIGIN: &str = "http://localhost:5173";
pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "changeme";
pub const ATTEMPTS: u32 = 2;

/// A relay device served on an ephemeral local port.
pub struct MockDevice {
    pub address: SocketAddr,
    pub up: SimulatedPin,
    pub down: SimulatedPin,
}

impl MockDevice {
    pub async fn spawn(auth_enabled: bool) -> Self {
        let settings = device_configs::Settings {
            server: device_configs::Server {
                host: String::from("127.0.0.1"),
                port: 0,
            },
            logger: device_configs::Logger {
                level: String::from("debug"),
            },
            relay: device_configs::Relay {
                up: device_configs::RelayPin {
                    pin: 26,
                    active_low: false,
                },
                down: device_configs::RelayPin {
                    pin: 27,
                    active_low: false,
                },
            },
            auth: device_configs::Auth {
                enabled: auth_enabled,
                username: String::from(USERNAME),
                password: String::from(PASSWORD),
            },
        };

        let up = SimulatedPin::new(26);
        let down = SimulatedPin::new(27);
        let controller = MotionController::from_pins(
            up.clone(),
            Polarity::ActiveHigh,
            down.clone(),
            Polarity::ActiveHigh,
        )
        .unwrap();

        let router = calefaccion_server::app::create_app(&settings, controller);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { address, up, down }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/", self.address)
    }

    /// Active-high pins: the level is the energized flag.
    pub fn energized(&self) -> (bool, bool) {
        (self.up.is_high(), self.down.is_high())
    }
}

/// A device that answers every call with `503` and counts the calls.
pub struct FailingDevice {
    pub address: SocketAddr,
    hits: Arc<AtomicUsize>,
}

impl FailingDevice {
    pub async fn spawn() -> Self {
        let hits = Arc::new(AtomicUsize::new(0));

        let router = Router::new()
            .fallback(|State(hits): State<Arc<AtomicUsize>>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                StatusCode::SERVICE_UNAVAILABLE
            })
            .with_state(hits.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { address, hits }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.address)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

pub struct MockApp {
    pub router: Router,
}

impl MockApp {
    pub fn new(base_url: String) -> Self {
        Self::with_credentials(base_url, "", "")
    }

    pub fn with_credentials(base_url: String, username: &str, password: &str) -> Self {
        Self::build(base_url, username, password, vec![String::from(ORIGIN)])
    }

    pub fn with_origins(base_url: String, origins: &[&str]) -> Self {
        let origins = origins.iter().map(|origin| String::from(*origin)).collect();

        Self::build(base_url, "", "", origins)
    }

    fn build(base_url: String, username: &str, password: &str, origins: Vec<String>) -> Self {
        let settings = Settings {
            server: Server {
                host: String::from("127.0.0.1"),
                port: 0,
            },
            logger: Logger {
                level: String::from("debug"),
            },
            device: Device {
                base_url,
                username: String::from(username),
                password: String::from(password),
                attempts: ATTEMPTS,
                retry_delay_ms: 10,
                timeout_ms: 1000,
            },
            cors: Cors { origins },
        };

        Self {
            router: calefaccion_proxy::app::create_app(&settings).unwrap(),
        }
    }
}

pub async fn read_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
