//! Value objects returned by domain services.

pub mod login;

pub use login::LoginOutcome;
