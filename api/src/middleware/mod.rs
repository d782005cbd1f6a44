//! HTTP middleware: the bearer-token gate and CORS policy.

pub mod auth;
pub mod cors;

pub use auth::{AuthContext, JwtAuth};
pub use cors::create_cors;
