//! Shared fixtures for unit tests.

pub mod setup;
