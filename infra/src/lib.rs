//! Infrastructure layer: concrete MySQL persistence behind the repository
//! traits defined in `ems_core`.

pub mod database;

pub use database::{create_pool, init_schema};
pub use database::mysql::{MySqlEmployeeRepository, MySqlUserRepository};
