use alloc::string::String;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::StopTarget;

/// Body accepted by the proxy's `POST /stop`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopRequest {
    #[serde(default)]
    pub relay: StopTarget,
}

/// Wraps whatever the device answered for a forwarded command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyResponse {
    pub ok: bool,
    pub device_response: Value,
}

/// Body of the proxy's `GET /health`: proxy liveness plus device reachability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyHealth {
    pub ok: bool,
    pub device_base_url: String,
    pub device: Value,
}
