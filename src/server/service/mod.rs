//! Business logic layer.
//!
//! Services validate requests, check references against parent tables and map repository
//! rows into wire DTOs. Request failures are raised as [`RequestError`](crate::server::error::request::RequestError)
//! through the [`Error`](crate::server::error::Error) helpers.

pub mod brigade;
pub mod inventory;
pub mod resource_type;
pub mod size;

/// Outcome of a create-or-update write
#[derive(Clone, Debug, PartialEq)]
pub enum Upserted<T> {
    Created(T),
    Updated(T),
}

impl<T> Upserted<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Created(value) | Self::Updated(value) => value,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
