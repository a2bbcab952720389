use sea_orm::{DbErr, Value};

use crate::{
    model::inventory::Category,
    server::{
        model::db::{CategoryTagModel, CountModel, ResourceTypeModel},
        sql::{SqlExecutor, UpdateBuilder},
    },
};

#[derive(Clone, Debug)]
pub struct NewResourceType {
    pub categoria: String,
    pub nombre: String,
    pub requiere_talla: bool,
    pub requiere_cantidad: bool,
    pub activo: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ResourceTypeChanges {
    pub categoria: Option<String>,
    pub nombre: Option<String>,
    pub requiere_talla: Option<bool>,
    pub requiere_cantidad: Option<bool>,
    pub activo: Option<bool>,
}

/// Optional list filters, each bound as a parameter
#[derive(Clone, Debug, Default)]
pub struct ResourceTypeFilter {
    pub categoria: Option<String>,
    pub activo: Option<bool>,
}

pub struct ResourceTypeRepository<'a> {
    sql: &'a SqlExecutor,
}

impl<'a> ResourceTypeRepository<'a> {
    pub fn new(sql: &'a SqlExecutor) -> Self {
        Self { sql }
    }

    /// Resource types matching the filter, ordered by category then name
    pub async fn list(&self, filter: ResourceTypeFilter) -> Result<Vec<ResourceTypeModel>, DbErr> {
        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        if let Some(categoria) = filter.categoria {
            conditions.push(format!("categoria = @param{}", params.len()));
            params.push(categoria.into());
        }
        if let Some(activo) = filter.activo {
            conditions.push(format!("activo = @param{}", params.len()));
            params.push(activo.into());
        }

        let mut query = String::from("SELECT * FROM tipos_recursos");
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY categoria, nombre");

        self.sql.fetch_all(&query, params).await
    }

    /// Distinct category tags currently stored, sorted
    pub async fn categories(&self) -> Result<Vec<String>, DbErr> {
        let rows: Vec<CategoryTagModel> = self
            .sql
            .fetch_all(
                "SELECT DISTINCT categoria FROM tipos_recursos ORDER BY categoria",
                vec![],
            )
            .await?;

        Ok(rows.into_iter().map(|row| row.categoria).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ResourceTypeModel>, DbErr> {
        self.sql
            .fetch_optional(
                "SELECT * FROM tipos_recursos WHERE id = @param0",
                vec![id.into()],
            )
            .await
    }

    /// Finds the resource type holding the (categoria, nombre) pair, ignoring `exclude_id`
    pub async fn find_by_category_and_name(
        &self,
        categoria: &str,
        nombre: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<ResourceTypeModel>, DbErr> {
        let mut query =
            String::from("SELECT * FROM tipos_recursos WHERE categoria = @param0 AND nombre = @param1");
        let mut params: Vec<Value> = vec![categoria.into(), nombre.into()];

        if let Some(id) = exclude_id {
            query.push_str(" AND id <> @param2");
            params.push(id.into());
        }

        self.sql.fetch_optional(&query, params).await
    }

    pub async fn create(&self, resource_type: NewResourceType) -> Result<ResourceTypeModel, DbErr> {
        let query = "
            INSERT INTO tipos_recursos (categoria, nombre, requiere_talla, requiere_cantidad, activo)
            OUTPUT INSERTED.*
            VALUES (@param0, @param1, @param2, @param3, @param4)
        ";

        let params: Vec<Value> = vec![
            resource_type.categoria.into(),
            resource_type.nombre.into(),
            resource_type.requiere_talla.into(),
            resource_type.requiere_cantidad.into(),
            resource_type.activo.into(),
        ];

        self.sql
            .fetch_optional(query, params)
            .await?
            .ok_or_else(|| DbErr::RecordNotInserted)
    }

    pub async fn update(
        &self,
        id: i32,
        changes: ResourceTypeChanges,
    ) -> Result<Option<ResourceTypeModel>, DbErr> {
        let mut update = UpdateBuilder::new("tipos_recursos");
        update
            .set_some("categoria", changes.categoria)
            .set_some("nombre", changes.nombre)
            .set_some("requiere_talla", changes.requiere_talla)
            .set_some("requiere_cantidad", changes.requiere_cantidad)
            .set_some("activo", changes.activo);

        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        update.touch("updated_at");
        let (query, params) = update.build(id);

        self.sql.fetch_optional(&query, params).await
    }

    /// First inventory category, in catalog order, holding a row that references the type
    pub async fn find_referencing_category(&self, id: i32) -> Result<Option<Category>, DbErr> {
        for category in Category::ALL {
            let query = format!(
                "SELECT COUNT(*) AS count FROM {} WHERE tipo_recurso_id = @param0",
                category.table()
            );
            let count: Option<CountModel> =
                self.sql.fetch_optional(&query, vec![id.into()]).await?;

            if count.map(|c| c.count).unwrap_or(0) > 0 {
                return Ok(Some(category));
            }
        }

        Ok(None)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let outcome = self
            .sql
            .execute(
                "DELETE FROM tipos_recursos WHERE id = @param0",
                vec![id.into()],
            )
            .await?;

        Ok(outcome.rows_affected)
    }
}
