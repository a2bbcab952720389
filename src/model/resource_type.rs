use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::flag;

/// A catalog entry describing a class of equipment within one inventory category
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ResourceTypeDto {
    pub id: i32,
    /// Category tag, e.g. `EPP` or `RESCATE_ANIMAL`
    pub categoria: String,
    pub nombre: String,
    pub requiere_talla: bool,
    pub requiere_cantidad: bool,
    pub activo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating or partially updating a resource type.
///
/// Flags accept JSON booleans, `0`/`1` and the strings `"true"`, `"false"`, `"1"`, `"0"`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ResourceTypeInputDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(
        default,
        deserialize_with = "flag::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<bool>))]
    pub requiere_talla: Option<bool>,
    #[serde(
        default,
        deserialize_with = "flag::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<bool>))]
    pub requiere_cantidad: Option<bool>,
    #[serde(
        default,
        deserialize_with = "flag::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<bool>))]
    pub activo: Option<bool>,
}

/// Query string filters for listing resource types
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct ResourceTypeFilterDto {
    /// Only return resource types of this category tag
    pub categoria: Option<String>,
    /// `true` lists active types, any other value lists inactive ones
    pub activo: Option<String>,
}
