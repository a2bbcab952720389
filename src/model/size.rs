use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A clothing/footwear size referenced by PPE inventory rows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SizeDto {
    pub id: i32,
    pub codigo: String,
    pub descripcion: String,
    pub numero_equivalente: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating or partially updating a size
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SizeInputDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_equivalente: Option<i32>,
}
