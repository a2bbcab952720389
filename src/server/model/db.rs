//! Row models decoded from query results.
//!
//! Each model mirrors the columns a repository selects and converts into the matching wire
//! DTO from [`crate::model`].

use chrono::NaiveDateTime;
use sea_orm::FromQueryResult;

use crate::model::{
    brigade::BrigadeDto,
    inventory::{InventoryItemDto, InventoryRowDto},
    resource_type::ResourceTypeDto,
    size::SizeDto,
};

/// Row of `brigadas`
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct BrigadeModel {
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

/// Row of `tallas`
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct SizeModel {
    pub id: i32,
    pub codigo: String,
    pub descripcion: String,
    pub numero_equivalente: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Row of `tipos_recursos`
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct ResourceTypeModel {
    pub id: i32,
    pub categoria: String,
    pub nombre: String,
    pub requiere_talla: bool,
    pub requiere_cantidad: bool,
    pub activo: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Row of any `inventario_*` table
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct InventoryItemModel {
    pub id: i32,
    pub brigada_id: i32,
    pub tipo_recurso_id: i32,
    pub talla_id: Option<i32>,
    pub cantidad: i32,
    pub monto_aproximado: Option<f64>,
    pub observaciones: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Inventory row joined with its resource type and optional size
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct InventoryRowModel {
    pub id: i32,
    pub brigada_id: i32,
    pub tipo_recurso_id: i32,
    pub talla_id: Option<i32>,
    pub cantidad: i32,
    pub monto_aproximado: Option<f64>,
    pub observaciones: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub categoria: String,
    pub tipo_recurso_nombre: String,
    pub requiere_talla: bool,
    pub talla_codigo: Option<String>,
    pub talla_descripcion: Option<String>,
}

/// Single `COUNT(*) AS count` column
#[derive(Clone, Copy, Debug, FromQueryResult)]
pub struct CountModel {
    pub count: i64,
}

/// Single `categoria` column
#[derive(Clone, Debug, FromQueryResult)]
pub struct CategoryTagModel {
    pub categoria: String,
}

impl From<BrigadeModel> for BrigadeDto {
    fn from(m: BrigadeModel) -> Self {
        Self {
            id: m.id,
            nombre: m.nombre,
            cantidad_bomberos_activos: m.cantidad_bomberos_activos,
            contacto_celular_comandante: m.contacto_celular_comandante,
            encargado_logistica: m.encargado_logistica,
            contacto_celular_logistica: m.contacto_celular_logistica,
            numero_emergencia_publico: m.numero_emergencia_publico,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<SizeModel> for SizeDto {
    fn from(m: SizeModel) -> Self {
        Self {
            id: m.id,
            codigo: m.codigo,
            descripcion: m.descripcion,
            numero_equivalente: m.numero_equivalente,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<ResourceTypeModel> for ResourceTypeDto {
    fn from(m: ResourceTypeModel) -> Self {
        Self {
            id: m.id,
            categoria: m.categoria,
            nombre: m.nombre,
            requiere_talla: m.requiere_talla,
            requiere_cantidad: m.requiere_cantidad,
            activo: m.activo,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<InventoryItemModel> for InventoryItemDto {
    fn from(m: InventoryItemModel) -> Self {
        Self {
            id: m.id,
            brigada_id: m.brigada_id,
            tipo_recurso_id: m.tipo_recurso_id,
            talla_id: m.talla_id,
            cantidad: m.cantidad,
            monto_aproximado: m.monto_aproximado,
            observaciones: m.observaciones,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<InventoryRowModel> for InventoryRowDto {
    fn from(m: InventoryRowModel) -> Self {
        Self {
            id: m.id,
            brigada_id: m.brigada_id,
            tipo_recurso_id: m.tipo_recurso_id,
            talla_id: m.talla_id,
            cantidad: m.cantidad,
            monto_aproximado: m.monto_aproximado,
            observaciones: m.observaciones,
            created_at: m.created_at,
            updated_at: m.updated_at,
            categoria: m.categoria,
            tipo_recurso_nombre: m.tipo_recurso_nombre,
            requiere_talla: m.requiere_talla,
            talla_codigo: m.talla_codigo,
            talla_descripcion: m.talla_descripcion,
        }
    }
}
