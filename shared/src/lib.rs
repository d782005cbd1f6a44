//! Shared configuration and response types for the employee management backend.
//!
//! This crate sits at the bottom of the workspace: it depends on nothing else
//! and is consumed by `ems_core`, `ems_infra`, and `ems_api`.

pub mod config;
pub mod types;
