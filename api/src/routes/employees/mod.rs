//! Authenticated employee record endpoints. Every handler here sits
//! behind the bearer-token gate.

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;
