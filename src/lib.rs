//! Management API for forestry firefighting brigades and their equipment inventory.
//!
//! - [`model`] holds the JSON wire types shared by the server and the client.
//! - [`server`] (feature `server`) is the axum REST API over PostgreSQL or SQLite.
//! - [`client`] is the multi-step brigade form wizard that replays its state against the API.

pub mod client;
pub mod model;

#[cfg(feature = "server")]
pub mod server;
