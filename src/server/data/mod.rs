//! Data access layer repositories.
//!
//! Repositories wrap the [`SqlExecutor`](crate::server::sql::SqlExecutor) and issue one
//! parameterized statement per operation. They perform no validation; existence and
//! ownership checks live in the service layer.

pub mod brigade;
pub mod inventory;
pub mod resource_type;
pub mod size;
