//! Registration and login.

mod service;

pub use service::AuthService;
