mod brigade;
mod inventory;
mod resource_type;
mod size;

use axum::http::StatusCode;
use serde_json::json;

use crate::{setup, TestApp};
