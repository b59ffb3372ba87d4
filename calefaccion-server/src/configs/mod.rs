mod settings;

pub use settings::{Auth, Credentials, Logger, Relay, RelayPin, Server, Settings};
