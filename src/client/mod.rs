//! Brigade form wizard client.
//!
//! [`wizard::Wizard`] holds the ten-step form state and replays it against the REST API
//! through the [`api::BrigadeApi`] trait. [`http::HttpBrigadeApi`] is the reqwest transport.

pub mod api;
#[cfg(feature = "client")]
pub mod http;
pub mod wizard;
