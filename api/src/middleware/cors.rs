//! CORS configuration.

use actix_cors::Cors;
use actix_web::http::header;
use std::env;

/// Build the CORS policy from the environment.
///
/// When `CORS_ALLOWED_ORIGINS` is set it is a comma-separated allowlist;
/// otherwise any origin is accepted, which suits local development against
/// a browser frontend.
pub fn create_cors() -> Cors {
    let base = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(3600);

    match env::var("CORS_ALLOWED_ORIGINS") {
        Ok(origins) => origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .fold(base, |cors, origin| cors.allowed_origin(origin)),
        Err(_) => base.allow_any_origin(),
    }
}
