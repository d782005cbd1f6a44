//! HTTP surface for the employee management backend.
//!
//! Thin layer over `ems_core`: DTO parsing, bearer-token gating, and the
//! mapping from domain errors onto HTTP statuses. No business rules live
//! here.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
