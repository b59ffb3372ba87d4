mod api;

pub use api::ApiError;

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use calefaccion_api::models::ErrorResponse;
use uuid::Uuid;

pub const AUTH_CHALLENGE: &str = "Basic realm=\"Login Required\"";

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, AUTH_CHALLENGE)],
                Json(ErrorResponse::new("unauthorized")),
            )
                .into_response(),
            ApiError::NotFound => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse::new("not_found"))).into_response()
            }
            ApiError::ActuatorError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Actuator error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("actuator_fault").with_error_id(error_id.to_string())),
                )
                    .into_response()
            }
        }
    }
}
