use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use calefaccion_api::models::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Device error: {0}")]
    DeviceError(#[from] reqwest::Error),

    #[error("Unexpected device response: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        let error = match self {
            ProxyError::DeviceError(_) => "device_unreachable",
            ProxyError::InvalidResponse(_) => "invalid_device_response",
        };

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse::new(error).with_detail(self.to_string())),
        )
            .into_response()
    }
}
