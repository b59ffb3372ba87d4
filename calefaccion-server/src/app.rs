use std::sync::Arc;

use axum::{middleware, Router};
use calefaccion_embedded::Actuator;
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::handles::*;
use crate::middlewares::{cors, AuthState};
use crate::services::ActuatorService;

pub fn create_app<A>(settings: &Settings, actuator: A) -> Router
where
    A: Actuator + Send + 'static,
{
    let actuator_service = Arc::new(ActuatorService::new(actuator));

    let auth_state = AuthState {
        credentials: settings.auth.credentials().map(Arc::new),
    };

    if auth_state.credentials.is_some() {
        tracing::info!("basic authentication enabled");
    }

    Router::new()
        .merge(control_router(
            ControlState {
                actuator_service: actuator_service.clone(),
            },
            auth_state,
        ))
        .fallback(not_found)
        .layer(middleware::from_fn(cors))
        .layer(TraceLayer::new_for_http())
}
