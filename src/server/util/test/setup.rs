use sea_orm::{Database, DbErr};

use crate::{
    model::inventory::Category,
    server::{
        data::{
            brigade::{BrigadeRepository, NewBrigade},
            inventory::{InventoryRepository, NewInventoryItem},
            resource_type::{NewResourceType, ResourceTypeRepository},
            size::{NewSize, SizeRepository},
        },
        model::{
            app::AppState,
            db::{BrigadeModel, InventoryItemModel, ResourceTypeModel, SizeModel},
        },
        sql::{schema::create_schema, SqlExecutor},
    },
};

pub struct TestSetup {
    pub sql: SqlExecutor,
    pub state: AppState,
}

/// Connects to an in-memory SQLite database with every table created
pub async fn test_setup() -> Result<TestSetup, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    let sql = SqlExecutor::new(db)?;

    create_schema(&sql).await?;

    let state = AppState::new(sql.clone());

    Ok(TestSetup { sql, state })
}

impl TestSetup {
    /// Inserts a brigade with only a name and a fixed crew count
    pub async fn insert_brigade(&self, nombre: &str) -> Result<BrigadeModel, DbErr> {
        BrigadeRepository::new(&self.sql)
            .create(NewBrigade {
                nombre: nombre.to_string(),
                cantidad_bomberos_activos: 10,
                ..Default::default()
            })
            .await
    }

    pub async fn insert_size(&self, codigo: &str) -> Result<SizeModel, DbErr> {
        SizeRepository::new(&self.sql)
            .create(NewSize {
                codigo: codigo.to_string(),
                descripcion: format!("Talla {}", codigo),
                numero_equivalente: None,
            })
            .await
    }

    /// Inserts an active resource type in `category`
    pub async fn insert_resource_type(
        &self,
        category: Category,
        nombre: &str,
        requiere_talla: bool,
    ) -> Result<ResourceTypeModel, DbErr> {
        ResourceTypeRepository::new(&self.sql)
            .create(NewResourceType {
                categoria: category.tag().to_string(),
                nombre: nombre.to_string(),
                requiere_talla,
                requiere_cantidad: true,
                activo: true,
            })
            .await
    }

    pub async fn insert_inventory(
        &self,
        category: Category,
        brigada_id: i32,
        tipo_recurso_id: i32,
        talla_id: Option<i32>,
        cantidad: i32,
    ) -> Result<InventoryItemModel, DbErr> {
        InventoryRepository::new(&self.sql, category)
            .create(NewInventoryItem {
                brigada_id,
                tipo_recurso_id,
                talla_id,
                cantidad,
                monto_aproximado: None,
                observaciones: None,
            })
            .await
    }
}
