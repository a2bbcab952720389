use sea_orm::{DbErr, Value};

use crate::{
    model::inventory::Category,
    server::{
        model::db::{InventoryItemModel, InventoryRowModel},
        sql::{SqlExecutor, UpdateBuilder},
    },
};

#[derive(Clone, Debug, Default)]
pub struct NewInventoryItem {
    pub brigada_id: i32,
    pub tipo_recurso_id: i32,
    pub talla_id: Option<i32>,
    pub cantidad: i32,
    pub monto_aproximado: Option<f64>,
    pub observaciones: Option<String>,
}

/// New values for an existing inventory row.
///
/// `cantidad` and `observaciones` are always written; `monto_aproximado` only when supplied.
#[derive(Clone, Debug, Default)]
pub struct InventoryChanges {
    pub cantidad: i32,
    pub observaciones: Option<String>,
    pub monto_aproximado: Option<f64>,
}

/// Repository over the `inventario_*` table of one category
pub struct InventoryRepository<'a> {
    sql: &'a SqlExecutor,
    category: Category,
}

impl<'a> InventoryRepository<'a> {
    pub fn new(sql: &'a SqlExecutor, category: Category) -> Self {
        Self { sql, category }
    }

    /// Inventory rows of a brigade joined with their resource type and size
    pub async fn list_by_brigade(&self, brigada_id: i32) -> Result<Vec<InventoryRowModel>, DbErr> {
        let query = format!(
            "SELECT
                i.*,
                tr.categoria,
                tr.nombre AS tipo_recurso_nombre,
                tr.requiere_talla,
                t.codigo AS talla_codigo,
                t.descripcion AS talla_descripcion
            FROM {} i
            INNER JOIN tipos_recursos tr ON tr.id = i.tipo_recurso_id
            LEFT JOIN tallas t ON t.id = i.talla_id
            WHERE i.brigada_id = @param0
            ORDER BY tr.nombre, t.codigo",
            self.category.table()
        );

        self.sql.fetch_all(&query, vec![brigada_id.into()]).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<InventoryItemModel>, DbErr> {
        let query = format!("SELECT * FROM {} WHERE id = @param0", self.category.table());

        self.sql.fetch_optional(&query, vec![id.into()]).await
    }

    /// Finds the row for the (brigade, resource type, size) tuple; a missing size matches `NULL`
    pub async fn find_existing(
        &self,
        brigada_id: i32,
        tipo_recurso_id: i32,
        talla_id: Option<i32>,
    ) -> Result<Option<InventoryItemModel>, DbErr> {
        let mut query = format!(
            "SELECT * FROM {} WHERE brigada_id = @param0 AND tipo_recurso_id = @param1",
            self.category.table()
        );
        let mut params: Vec<Value> = vec![brigada_id.into(), tipo_recurso_id.into()];

        match talla_id {
            Some(talla_id) => {
                query.push_str(" AND talla_id = @param2");
                params.push(talla_id.into());
            }
            None => query.push_str(" AND talla_id IS NULL"),
        }

        self.sql.fetch_optional(&query, params).await
    }

    pub async fn create(&self, item: NewInventoryItem) -> Result<InventoryItemModel, DbErr> {
        let query = format!(
            "INSERT INTO {} (
                brigada_id,
                tipo_recurso_id,
                talla_id,
                cantidad,
                monto_aproximado,
                observaciones
            )
            OUTPUT INSERTED.*
            VALUES (@param0, @param1, @param2, @param3, @param4, @param5)",
            self.category.table()
        );

        let params: Vec<Value> = vec![
            item.brigada_id.into(),
            item.tipo_recurso_id.into(),
            item.talla_id.into(),
            item.cantidad.into(),
            item.monto_aproximado.into(),
            item.observaciones.into(),
        ];

        self.sql
            .fetch_optional(&query, params)
            .await?
            .ok_or_else(|| DbErr::RecordNotInserted)
    }

    pub async fn update(
        &self,
        id: i32,
        changes: InventoryChanges,
    ) -> Result<Option<InventoryItemModel>, DbErr> {
        let mut update = UpdateBuilder::new(self.category.table());
        update
            .set("cantidad", changes.cantidad)
            .set("observaciones", changes.observaciones)
            .set_some("monto_aproximado", changes.monto_aproximado)
            .touch("updated_at");

        let (query, params) = update.build(id);

        self.sql.fetch_optional(&query, params).await
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let query = format!("DELETE FROM {} WHERE id = @param0", self.category.table());
        let outcome = self.sql.execute(&query, vec![id.into()]).await?;

        Ok(outcome.rows_affected)
    }
}
