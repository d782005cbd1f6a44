//! Shared types used across the workspace.

pub mod response;

pub use response::{ErrorResponse, MessageResponse};
