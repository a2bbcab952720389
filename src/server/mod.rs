//! Server application core modules.
//!
//! REST API for brigades, sizes, resource types and per-category brigade inventory. Requests
//! flow controller → service → repository → [`sql::SqlExecutor`], which translates the
//! T-SQL flavored statement text for the connected backend before execution.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod sql;
pub mod startup;
pub mod util;
