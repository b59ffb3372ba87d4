use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use calefaccion_api::models::*;

use crate::errors::ProxyError;
use crate::services::DeviceService;

#[derive(Clone)]
pub struct ProxyState {
    pub device_service: Arc<DeviceService>,
}

pub fn relay_router(proxy_state: ProxyState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/state", get(get_state))
        .route("/up", post(move_up))
        .route("/down", post(move_down))
        .route("/up/off", post(release_up))
        .route("/down/off", post(release_down))
        .route("/stop", post(stop))
        .with_state(proxy_state)
}

pub async fn health(State(state): State<ProxyState>) -> Result<Json<ProxyHealth>, ProxyError> {
    let device = state.device_service.get("/health").await?;

    Ok(Json(ProxyHealth {
        ok: true,
        device_base_url: state.device_service.base_url().to_string(),
        device,
    }))
}

pub async fn get_state(State(state): State<ProxyState>) -> Result<Json<StateResponse>, ProxyError> {
    let body = state.device_service.get("/state").await?;

    Ok(Json(serde_json::from_value(body)?))
}

pub async fn move_up(State(state): State<ProxyState>) -> Result<Json<ProxyResponse>, ProxyError> {
    forward(&state, "/up", &[]).await
}

pub async fn move_down(State(state): State<ProxyState>) -> Result<Json<ProxyResponse>, ProxyError> {
    forward(&state, "/down", &[]).await
}

pub async fn release_up(State(state): State<ProxyState>) -> Result<Json<ProxyResponse>, ProxyError> {
    forward(&state, "/stop", &[("relay", StopTarget::Up.as_str())]).await
}

pub async fn release_down(
    State(state): State<ProxyState>,
) -> Result<Json<ProxyResponse>, ProxyError> {
    forward(&state, "/stop", &[("relay", StopTarget::Down.as_str())]).await
}

pub async fn stop(
    State(state): State<ProxyState>,
    Json(body): Json<StopRequest>,
) -> Result<Json<ProxyResponse>, ProxyError> {
    forward(&state, "/stop", &[("relay", body.relay.as_str())]).await
}

async fn forward(
    state: &ProxyState,
    path: &str,
    query: &[(&str, &str)],
) -> Result<Json<ProxyResponse>, ProxyError> {
    let device_response = state.device_service.post(path, query).await?;

    Ok(Json(ProxyResponse {
        ok: true,
        device_response,
    }))
}
