//! Application factory: route table, middleware stack, and JSON body
//! handling.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{error::InternalError, middleware::Logger, web, App, Error, HttpResponse};

use crate::middleware::{create_cors, JwtAuth};
use crate::routes::auth::{login::login, register::register};
use crate::routes::employees::{
    create::create, delete::delete, get::get, list::list, update::update,
};
use crate::routes::AppState;

use ems_core::repositories::{EmployeeRepository, UserRepository};
use ems_core::services::token::TokenService;
use ems_shared::types::response::ErrorResponse;

/// Assemble the application.
///
/// `/register` and `/login` are open; everything under `/employees` sits
/// behind the bearer-token gate. Generic over the repository
/// implementations so integration tests can run against in-memory stores.
pub fn create_app<U, E>(
    app_state: web::Data<AppState<U, E>>,
    token_service: Arc<TokenService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    E: EmployeeRepository + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health_check))
        .service(
            web::resource("/register")
                .app_data(json_config("Username and password are required."))
                .route(web::post().to(register::<U, E>)),
        )
        .service(
            web::resource("/login")
                .app_data(json_config("Username and password are required."))
                .route(web::post().to(login::<U, E>)),
        )
        .service(
            web::scope("/employees")
                .app_data(json_config("All fields are required."))
                .wrap(JwtAuth::new(token_service))
                .route("", web::post().to(create::<U, E>))
                .route("", web::get().to(list::<U, E>))
                .route("/{id}", web::get().to(get::<U, E>))
                .route("/{id}", web::put().to(update::<U, E>))
                .route("/{id}", web::delete().to(delete::<U, E>)),
        )
        .default_service(web::route().to(not_found))
}

/// JSON extractor configuration answering malformed or incomplete bodies
/// with a 400 and the endpoint's required-fields message.
fn json_config(message: &'static str) -> web::JsonConfig {
    web::JsonConfig::default().error_handler(move |err, _req| {
        let response = HttpResponse::BadRequest()
            .json(ErrorResponse::new("validation_failed", message));
        InternalError::from_response(err, response).into()
    })
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "ems-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "not_found",
        "The requested resource was not found.",
    ))
}
