#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Route not found")]
    NotFound,

    #[error("Actuator error: {0}")]
    ActuatorError(#[from] calefaccion_embedded::Error),
}
