use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BrigadeDto {
    pub id: i32,
    pub nombre: String,
    pub cantidad_bomberos_activos: i32,
    pub contacto_celular_comandante: Option<String>,
    pub encargado_logistica: Option<String>,
    pub contacto_celular_logistica: Option<String>,
    pub numero_emergencia_publico: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request body for creating or partially updating a brigade.
///
/// On create only `nombre` is required. On update every supplied field is written and
/// omitted fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BrigadeInputDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cantidad_bomberos_activos: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacto_celular_comandante: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encargado_logistica: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacto_celular_logistica: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numero_emergencia_publico: Option<String>,
}
