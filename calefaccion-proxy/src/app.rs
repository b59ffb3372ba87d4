use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::handles::*;
use crate::services::DeviceService;

pub fn create_app(settings: &Settings) -> anyhow::Result<Router> {
    let device_service = Arc::new(DeviceService::new(settings.device.clone())?);

    let cors = CorsLayer::new()
        .allow_origin(allow_origin(&settings.cors.origins)?)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Ok(Router::new()
        .merge(relay_router(ProxyState { device_service }))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// A `*` entry echoes the caller's origin, since a literal wildcard cannot be
/// combined with credentials.
fn allow_origin(origins: &[String]) -> anyhow::Result<AllowOrigin> {
    if origins.iter().any(|origin| origin == "*") {
        tracing::warn!("cors accepts any origin");
        return Ok(AllowOrigin::mirror_request());
    }

    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AllowOrigin::list(origins))
}
