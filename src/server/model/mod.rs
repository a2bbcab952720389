//! Server application models.
//!
//! Application state shared by the HTTP handlers and the row models decoded from query
//! results by the data layer.

pub mod app;
pub mod db;
