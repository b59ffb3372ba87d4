use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{MethodRouter, get, post};
use axum::{Json, Router, middleware};
use calefaccion_api::models::*;

use crate::errors::ApiError;
use crate::middlewares::{AuthState, basic_auth};
use crate::services::ActuatorService;

#[derive(Clone)]
pub struct ControlState {
    pub actuator_service: Arc<ActuatorService>,
}

/// The five device routes.
///
/// Credentials are checked only once a path and method have matched, so
/// unknown routes answer `404` without a challenge. A known path hit with
/// the wrong method is an unknown route as well.
pub fn control_router(control_state: ControlState, auth_state: AuthState) -> Router {
    let guarded = |route: MethodRouter<ControlState>| {
        route
            .route_layer(middleware::from_fn_with_state(auth_state.clone(), basic_auth))
            .fallback(not_found)
    };

    Router::new()
        .route("/health", guarded(get(health)))
        .route("/state", guarded(get(get_state)))
        .route("/up", guarded(post(move_up)))
        .route("/down", guarded(post(move_down)))
        .route("/stop", guarded(post(stop)))
        .with_state(control_state)
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

pub async fn get_state(
    State(state): State<ControlState>,
) -> Result<Json<StateResponse>, ApiError> {
    let state = state.actuator_service.execute(Command::QueryState).await?;

    Ok(Json(StateResponse { state }))
}

pub async fn move_up(State(state): State<ControlState>) -> Result<Json<ActionResponse>, ApiError> {
    apply(&state, Command::Up, Action::Up).await
}

pub async fn move_down(
    State(state): State<ControlState>,
) -> Result<Json<ActionResponse>, ApiError> {
    apply(&state, Command::Down, Action::Down).await
}

/// `relay=up|down|both`; anything else, or no selector, stops both.
pub async fn stop(
    State(state): State<ControlState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<ActionResponse>, ApiError> {
    let selector = params
        .iter()
        .find(|(key, _)| key == "relay")
        .map(|(_, value)| value.as_str());

    apply(
        &state,
        Command::Stop(StopTarget::from_selector(selector)),
        Action::Stop,
    )
    .await
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn apply(
    state: &ControlState,
    command: Command,
    action: Action,
) -> Result<Json<ActionResponse>, ApiError> {
    state.actuator_service.execute(command).await?;

    Ok(Json(ActionResponse::done(action)))
}
