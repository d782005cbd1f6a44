//! Domain services.

pub mod auth;
pub mod credential;
pub mod employee;
pub mod token;

pub use auth::AuthService;
pub use credential::CredentialService;
pub use employee::EmployeeService;
pub use token::TokenService;
