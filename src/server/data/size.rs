use sea_orm::{DbErr, Value};

use crate::server::{
    model::db::{CountModel, SizeModel},
    sql::{SqlExecutor, UpdateBuilder},
};

#[derive(Clone, Debug, Default)]
pub struct NewSize {
    pub codigo: String,
    pub descripcion: String,
    pub numero_equivalente: Option<i32>,
}

#[derive(Clone, Debug, Default)]
pub struct SizeChanges {
    pub codigo: Option<String>,
    pub descripcion: Option<String>,
    pub numero_equivalente: Option<i32>,
}

pub struct SizeRepository<'a> {
    sql: &'a SqlExecutor,
}

impl<'a> SizeRepository<'a> {
    pub fn new(sql: &'a SqlExecutor) -> Self {
        Self { sql }
    }

    /// All sizes ordered by code
    pub async fn list(&self) -> Result<Vec<SizeModel>, DbErr> {
        self.sql
            .fetch_all("SELECT * FROM tallas ORDER BY codigo", vec![])
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<SizeModel>, DbErr> {
        self.sql
            .fetch_optional("SELECT * FROM tallas WHERE id = @param0", vec![id.into()])
            .await
    }

    /// Finds a size holding `codigo`, ignoring the row `exclude_id` if provided
    pub async fn find_by_code(
        &self,
        codigo: &str,
        exclude_id: Option<i32>,
    ) -> Result<Option<SizeModel>, DbErr> {
        match exclude_id {
            Some(id) => {
                self.sql
                    .fetch_optional(
                        "SELECT * FROM tallas WHERE codigo = @param0 AND id <> @param1",
                        vec![codigo.into(), id.into()],
                    )
                    .await
            }
            None => {
                self.sql
                    .fetch_optional(
                        "SELECT * FROM tallas WHERE codigo = @param0",
                        vec![codigo.into()],
                    )
                    .await
            }
        }
    }

    pub async fn create(&self, size: NewSize) -> Result<SizeModel, DbErr> {
        let query = "
            INSERT INTO tallas (codigo, descripcion, numero_equivalente)
            OUTPUT INSERTED.*
            VALUES (@param0, @param1, @param2)
        ";

        let params: Vec<Value> = vec![
            size.codigo.into(),
            size.descripcion.into(),
            size.numero_equivalente.into(),
        ];

        self.sql
            .fetch_optional(query, params)
            .await?
            .ok_or_else(|| DbErr::RecordNotInserted)
    }

    /// Writes the supplied columns; returns `None` if no size has this id
    pub async fn update(&self, id: i32, changes: SizeChanges) -> Result<Option<SizeModel>, DbErr> {
        let mut update = UpdateBuilder::new("tallas");
        update
            .set_some("codigo", changes.codigo)
            .set_some("descripcion", changes.descripcion)
            .set_some("numero_equivalente", changes.numero_equivalente);

        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        update.touch("updated_at");
        let (query, params) = update.build(id);

        self.sql.fetch_optional(&query, params).await
    }

    /// Number of PPE inventory rows referencing the size
    pub async fn count_references(&self, id: i32) -> Result<i64, DbErr> {
        let count: Option<CountModel> = self
            .sql
            .fetch_optional(
                "SELECT COUNT(*) AS count FROM inventario_epp WHERE talla_id = @param0",
                vec![id.into()],
            )
            .await?;

        Ok(count.map(|c| c.count).unwrap_or(0))
    }

    /// Returns the number of rows deleted (0 or 1)
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let outcome = self
            .sql
            .execute("DELETE FROM tallas WHERE id = @param0", vec![id.into()])
            .await?;

        Ok(outcome.rows_affected)
    }
}
