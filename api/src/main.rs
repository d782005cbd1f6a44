use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use dotenvy::dotenv;
use log::info;

use ems_api::app::create_app;
use ems_api::routes::AppState;
use ems_core::services::auth::AuthService;
use ems_core::services::credential::CredentialService;
use ems_core::services::employee::EmployeeService;
use ems_core::services::token::{TokenConfig, TokenService};
use ems_infra::{create_pool, init_schema, MySqlEmployeeRepository, MySqlUserRepository};
use ems_shared::config::{DatabaseConfig, JwtConfig, ServerConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting employee management API");

    // No secret, no server. Refusing to start beats signing tokens with a
    // guessable default.
    let jwt_config = JwtConfig::from_env().context("loading JWT configuration")?;
    let database_config = DatabaseConfig::from_env().context("loading database configuration")?;
    let server_config = ServerConfig::from_env();

    let pool = create_pool(&database_config)
        .await
        .context("connecting to database")?;
    init_schema(&pool).await.context("initializing schema")?;

    let token_service = Arc::new(TokenService::new(TokenConfig::from(jwt_config)));
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let employee_repository = Arc::new(MySqlEmployeeRepository::new(pool));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        Arc::new(CredentialService::new()),
        Arc::clone(&token_service),
    ));
    let employee_service = Arc::new(EmployeeService::new(employee_repository));

    let app_state = web::Data::new(AppState {
        auth_service,
        employee_service,
    });

    let bind_address = server_config.bind_address();
    info!("Server listening on {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone(), Arc::clone(&token_service)))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
