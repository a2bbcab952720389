use serde::{Deserialize, Serialize};

/// The response when an API request is rejected (validation, missing entity, blocked deletion)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub message: String,
}

/// The response when a request fails with an unexpected server error
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InternalErrorDto {
    /// Always `true`
    pub error: bool,
    /// Generic error message
    pub message: String,
    /// Underlying error text, only present in development builds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Confirmation returned by delete endpoints
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Landing payload served at `/`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct IndexDto {
    pub message: String,
    pub documentation: String,
}
