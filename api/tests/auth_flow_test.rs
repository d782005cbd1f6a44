//! End-to-end tests for registration, login, and the bearer-token gate,
//! running against in-memory repositories.

use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};
use serde_json::{json, Value};

use ems_api::app::create_app;
use ems_api::routes::AppState;
use ems_core::repositories::employee::MockEmployeeRepository;
use ems_core::repositories::user::MockUserRepository;
use ems_core::services::auth::AuthService;
use ems_core::services::credential::CredentialService;
use ems_core::services::employee::EmployeeService;
use ems_core::services::token::{TokenConfig, TokenService};

type TestState = web::Data<AppState<MockUserRepository, MockEmployeeRepository>>;

fn test_state() -> (TestState, Arc<TokenService>) {
    let token_service = Arc::new(TokenService::new(TokenConfig::new("test-secret", 3600)));
    let auth_service = Arc::new(AuthService::new(
        Arc::new(MockUserRepository::new()),
        Arc::new(CredentialService::with_cost(4)),
        Arc::clone(&token_service),
    ));
    let employee_service = Arc::new(EmployeeService::new(Arc::new(
        MockEmployeeRepository::new(),
    )));

    (
        web::Data::new(AppState {
            auth_service,
            employee_service,
        }),
        token_service,
    )
}

#[actix_web::test]
async fn register_returns_201() {
    let (state, token_service) = test_state();
    let app = test::init_service(create_app(state, token_service)).await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({"username": "alice", "password": "hunter2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "User registered successfully.");
}

#[actix_web::test]
async fn duplicate_registration_returns_409_and_first_user_survives() {
    let (state, token_service) = test_state();
    let app = test::init_service(create_app(state, token_service)).await;

    let register = || {
        test::TestRequest::post()
            .uri("/register")
            .set_json(json!({"username": "alice", "password": "hunter2"}))
            .to_request()
    };
    assert_eq!(
        test::call_service(&app, register()).await.status(),
        StatusCode::CREATED
    );

    let resp = test::call_service(&app, register()).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Username already exists.");

    // The original account still logs in.
    let login = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"username": "alice", "password": "hunter2"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, login).await.status(),
        StatusCode::OK
    );
}

#[actix_web::test]
async fn register_with_empty_credentials_returns_400() {
    let (state, token_service) = test_state();
    let app = test::init_service(create_app(state, token_service)).await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({"username": "", "password": "hunter2"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Username and password are required.");
}

#[actix_web::test]
async fn register_with_missing_field_returns_400() {
    let (state, token_service) = test_state();
    let app = test::init_service(create_app(state, token_service)).await;

    let req = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({"username": "alice"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Username and password are required.");
}

#[actix_web::test]
async fn login_issues_token_that_passes_the_gate() {
    let (state, token_service) = test_state();
    let app = test::init_service(create_app(state, token_service)).await;

    let register = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({"username": "alice", "password": "hunter2"}))
        .to_request();
    test::call_service(&app, register).await;

    let login = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"username": "alice", "password": "hunter2"}))
        .to_request();
    let resp = test::call_service(&app, login).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Login successful.");
    let token = body["token"].as_str().unwrap().to_string();
    assert!(!token.is_empty());

    let list = test::TestRequest::get()
        .uri("/employees")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    assert_eq!(test::call_service(&app, list).await.status(), StatusCode::OK);
}

#[actix_web::test]
async fn wrong_password_and_unknown_user_get_identical_rejections() {
    let (state, token_service) = test_state();
    let app = test::init_service(create_app(state, token_service)).await;

    let register = test::TestRequest::post()
        .uri("/register")
        .set_json(json!({"username": "alice", "password": "hunter2"}))
        .to_request();
    test::call_service(&app, register).await;

    let wrong_password = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"username": "alice", "password": "nope"}))
        .to_request();
    let resp_wrong = test::call_service(&app, wrong_password).await;
    assert_eq!(resp_wrong.status(), StatusCode::BAD_REQUEST);
    let body_wrong: Value = test::read_body_json(resp_wrong).await;

    let unknown_user = test::TestRequest::post()
        .uri("/login")
        .set_json(json!({"username": "nobody", "password": "nope"}))
        .to_request();
    let resp_unknown = test::call_service(&app, unknown_user).await;
    assert_eq!(resp_unknown.status(), StatusCode::BAD_REQUEST);
    let body_unknown: Value = test::read_body_json(resp_unknown).await;

    assert_eq!(body_wrong, body_unknown);
    assert_eq!(body_wrong["message"], "Invalid username or password.");
}

#[actix_web::test]
async fn missing_token_returns_401() {
    let (state, token_service) = test_state();
    let app = test::init_service(create_app(state, token_service)).await;

    let req = test::TestRequest::get().uri("/employees").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Authentication required.");
}

#[actix_web::test]
async fn garbage_token_returns_403() {
    let (state, token_service) = test_state();
    let app = test::init_service(create_app(state, token_service)).await;

    let req = test::TestRequest::get()
        .uri("/employees")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid or expired token.");
}

#[actix_web::test]
async fn expired_token_returns_403() {
    let (state, token_service) = test_state();
    let app = test::init_service(create_app(state, token_service)).await;

    // A service with a negative lifetime issues already-expired tokens.
    let expired_issuer = TokenService::new(TokenConfig::new("test-secret", -3600));
    let token = expired_issuer.issue(1, "alice").unwrap();

    let req = test::TestRequest::get()
        .uri("/employees")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid or expired token.");
}

#[actix_web::test]
async fn token_signed_with_another_secret_returns_403() {
    let (state, token_service) = test_state();
    let app = test::init_service(create_app(state, token_service)).await;

    let other_issuer = TokenService::new(TokenConfig::new("other-secret", 3600));
    let token = other_issuer.issue(1, "alice").unwrap();

    let req = test::TestRequest::get()
        .uri("/employees")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
