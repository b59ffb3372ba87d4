use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RelayPin {
    pub pin: u8,
    /// Relay board energizes when the pin is driven low
    pub active_low: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Relay {
    pub up: RelayPin,
    pub down: RelayPin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auth {
    pub enabled: bool,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Auth {
    /// The expected credentials, or `None` when the routes are open.
    pub fn credentials(&self) -> Option<Credentials> {
        self.enabled.then(|| Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub relay: Relay,
    pub auth: Auth,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::with_prefix("CALEFACCION").separator("__"))
            .build()?
            .try_deserialize()
    }
}
