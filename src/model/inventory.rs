use std::{fmt, str::FromStr};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One of the eight fixed inventory partitions.
///
/// Each category is stored in its own `inventario_*` table and exposed under its own
/// `/api/inventario/{segment}` path. The serialized form is the stored category tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub enum Category {
    /// Personal protective equipment, the only size-bearing category
    #[serde(rename = "EPP")]
    Ppe,
    #[serde(rename = "HERRAMIENTAS")]
    Tools,
    /// Logistics, the only category that records an approximate amount
    #[serde(rename = "LOGISTICA")]
    Logistics,
    #[serde(rename = "ALIMENTACION")]
    Food,
    #[serde(rename = "CAMPO")]
    Field,
    #[serde(rename = "LIMPIEZA")]
    Cleaning,
    #[serde(rename = "MEDICAMENTOS")]
    Medicine,
    #[serde(rename = "RESCATE_ANIMAL")]
    AnimalRescue,
}

impl Category {
    /// Every category in wizard/catalog order
    pub const ALL: [Category; 8] = [
        Category::Ppe,
        Category::Tools,
        Category::Logistics,
        Category::Food,
        Category::Field,
        Category::Cleaning,
        Category::Medicine,
        Category::AnimalRescue,
    ];

    /// Tag stored in `tipos_recursos.categoria`
    pub fn tag(self) -> &'static str {
        match self {
            Category::Ppe => "EPP",
            Category::Tools => "HERRAMIENTAS",
            Category::Logistics => "LOGISTICA",
            Category::Food => "ALIMENTACION",
            Category::Field => "CAMPO",
            Category::Cleaning => "LIMPIEZA",
            Category::Medicine => "MEDICAMENTOS",
            Category::AnimalRescue => "RESCATE_ANIMAL",
        }
    }

    /// Inventory table backing this category
    pub fn table(self) -> &'static str {
        match self {
            Category::Ppe => "inventario_epp",
            Category::Tools => "inventario_herramientas",
            Category::Logistics => "inventario_logistica",
            Category::Food => "inventario_alimentacion",
            Category::Field => "inventario_campo",
            Category::Cleaning => "inventario_limpieza",
            Category::Medicine => "inventario_medicamentos",
            Category::AnimalRescue => "inventario_rescate_animal",
        }
    }

    /// Path segment under `/api/inventario/`
    pub fn path_segment(self) -> &'static str {
        match self {
            Category::AnimalRescue => "rescate-animal",
            other => other.key(),
        }
    }

    /// Key used in the per-brigade inventory response and by the wizard steps
    pub fn key(self) -> &'static str {
        match self {
            Category::Ppe => "epp",
            Category::Tools => "herramientas",
            Category::Logistics => "logistica",
            Category::Food => "alimentacion",
            Category::Field => "campo",
            Category::Cleaning => "limpieza",
            Category::Medicine => "medicamentos",
            Category::AnimalRescue => "rescate_animal",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.tag() == tag)
    }

    pub fn from_path_segment(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.path_segment() == segment)
    }

    /// Whether inventory rows of this category carry a size reference
    pub fn accepts_size(self) -> bool {
        self == Category::Ppe
    }

    /// Whether inventory rows of this category carry an approximate amount
    pub fn accepts_amount(self) -> bool {
        self == Category::Logistics
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| format!("Unknown resource category: {}", s))
    }
}

/// A stored inventory row as returned by upserts and single-row lookups
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InventoryItemDto {
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

/// An inventory row joined with its resource type and, for PPE, its size
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InventoryRowDto {
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

/// Full inventory of one brigade keyed by category
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BrigadeInventoryDto {
    pub epp: Vec<InventoryRowDto>,
    pub herramientas: Vec<InventoryRowDto>,
    pub logistica: Vec<InventoryRowDto>,
    pub alimentacion: Vec<InventoryRowDto>,
    pub campo: Vec<InventoryRowDto>,
    pub limpieza: Vec<InventoryRowDto>,
    pub medicamentos: Vec<InventoryRowDto>,
    pub rescate_animal: Vec<InventoryRowDto>,
}

impl BrigadeInventoryDto {
    pub fn get(&self, category: Category) -> &Vec<InventoryRowDto> {
        match category {
            Category::Ppe => &self.epp,
            Category::Tools => &self.herramientas,
            Category::Logistics => &self.logistica,
            Category::Food => &self.alimentacion,
            Category::Field => &self.campo,
            Category::Cleaning => &self.limpieza,
            Category::Medicine => &self.medicamentos,
            Category::AnimalRescue => &self.rescate_animal,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<InventoryRowDto> {
        match category {
            Category::Ppe => &mut self.epp,
            Category::Tools => &mut self.herramientas,
            Category::Logistics => &mut self.logistica,
            Category::Food => &mut self.alimentacion,
            Category::Field => &mut self.campo,
            Category::Cleaning => &mut self.limpieza,
            Category::Medicine => &mut self.medicamentos,
            Category::AnimalRescue => &mut self.rescate_animal,
        }
    }
}

/// Request body for the category-specific inventory upsert
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InventoryInputDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brigada_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo_recurso_id: Option<i32>,
    /// Size reference, only used by the `epp` category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talla_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cantidad: Option<i32>,
    /// Approximate amount, only used by the `logistica` category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monto_aproximado: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observaciones: Option<String>,
}
