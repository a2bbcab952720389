//! Wire models shared by the API server and the form wizard client.

pub mod api;
pub mod brigade;
pub mod flag;
pub mod inventory;
pub mod resource_type;
pub mod size;
