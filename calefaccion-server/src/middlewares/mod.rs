mod auth_middleware;
mod cors_middleware;

pub use auth_middleware::*;
pub use cors_middleware::*;
