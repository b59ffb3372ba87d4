use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::authorization::Basic;
use axum_extra::headers::{Authorization, Header};

use crate::configs::Credentials;
use crate::errors::ApiError;

#[derive(Clone)]
pub struct AuthState {
    /// `None` leaves every route open
    pub credentials: Option<Arc<Credentials>>,
}

/// Rejects the request with a Basic challenge unless it carries the
/// configured username and password.
pub async fn basic_auth(
    State(state): State<AuthState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(expected) = &state.credentials {
        let mut headers = req.headers().get_all(header::AUTHORIZATION).iter();

        let header: Authorization<Basic> =
            Authorization::decode(&mut headers).map_err(|_| ApiError::Unauthorized)?;

        if header.username() != expected.username || header.password() != expected.password {
            tracing::warn!("rejected credentials for {} {}", req.method(), req.uri().path());
            return Err(ApiError::Unauthorized);
        }
    }

    Ok(next.run(req).await)
}
