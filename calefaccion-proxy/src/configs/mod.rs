mod settings;

pub use settings::{Cors, Device, Logger, Server, Settings};
