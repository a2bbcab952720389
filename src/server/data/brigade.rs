use sea_orm::{DbErr, Value};

use crate::{
    model::inventory::Category,
    server::{
        model::db::BrigadeModel,
        sql::{SqlExecutor, SqlStatement, UpdateBuilder},
    },
};

/// Column values for a new brigade
#[derive(Clone, Debug, Default)]
pub struct NewBrigade {
    pub nombre: String,
    pub cantidad_bomberos_activos: i32,
    pub contacto_celular_comandante: Option<String>,
    pub encargado_logistica: Option<String>,
    pub contacto_celular_logistica: Option<String>,
    pub numero_emergencia_publico: Option<String>,
}

/// Columns to overwrite on an existing brigade.
///
/// `None` leaves a column untouched; `Some(None)` clears a nullable contact column.
#[derive(Clone, Debug, Default)]
pub struct BrigadeChanges {
    pub nombre: Option<String>,
    pub cantidad_bomberos_activos: Option<i32>,
    pub contacto_celular_comandante: Option<Option<String>>,
    pub encargado_logistica: Option<Option<String>>,
    pub contacto_celular_logistica: Option<Option<String>>,
    pub numero_emergencia_publico: Option<Option<String>>,
}

pub struct BrigadeRepository<'a> {
    sql: &'a SqlExecutor,
}

impl<'a> BrigadeRepository<'a> {
    pub fn new(sql: &'a SqlExecutor) -> Self {
        Self { sql }
    }

    /// All brigades ordered by name
    pub async fn list(&self) -> Result<Vec<BrigadeModel>, DbErr> {
        self.sql
            .fetch_all("SELECT * FROM brigadas ORDER BY nombre", vec![])
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<BrigadeModel>, DbErr> {
        self.sql
            .fetch_optional("SELECT * FROM brigadas WHERE id = @param0", vec![id.into()])
            .await
    }

    pub async fn create(&self, brigade: NewBrigade) -> Result<BrigadeModel, DbErr> {
        let query = "
            INSERT INTO brigadas (
                nombre,
                cantidad_bomberos_activos,
                contacto_celular_comandante,
                encargado_logistica,
                contacto_celular_logistica,
                numero_emergencia_publico
            )
            OUTPUT INSERTED.*
            VALUES (@param0, @param1, @param2, @param3, @param4, @param5)
        ";

        let params: Vec<Value> = vec![
            brigade.nombre.into(),
            brigade.cantidad_bomberos_activos.into(),
            brigade.contacto_celular_comandante.into(),
            brigade.encargado_logistica.into(),
            brigade.contacto_celular_logistica.into(),
            brigade.numero_emergencia_publico.into(),
        ];

        self.sql
            .fetch_optional(query, params)
            .await?
            .ok_or_else(|| DbErr::RecordNotInserted)
    }

    /// Writes the supplied columns and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(BrigadeModel))` - The row after the update, or unchanged if no column was supplied
    /// - `Ok(None)` - No brigade with this id
    pub async fn update(
        &self,
        id: i32,
        changes: BrigadeChanges,
    ) -> Result<Option<BrigadeModel>, DbErr> {
        let mut update = UpdateBuilder::new("brigadas");
        update
            .set_some("nombre", changes.nombre)
            .set_some("cantidad_bomberos_activos", changes.cantidad_bomberos_activos)
            .set_some(
                "contacto_celular_comandante",
                changes.contacto_celular_comandante,
            )
            .set_some("encargado_logistica", changes.encargado_logistica)
            .set_some(
                "contacto_celular_logistica",
                changes.contacto_celular_logistica,
            )
            .set_some(
                "numero_emergencia_publico",
                changes.numero_emergencia_publico,
            );

        if update.is_empty() {
            return self.get_by_id(id).await;
        }

        update.touch("updated_at");
        let (query, params) = update.build(id);

        self.sql.fetch_optional(&query, params).await
    }

    /// Deletes a brigade together with its inventory rows in every category.
    ///
    /// Runs as one transaction so a failure leaves both the brigade and its inventory intact.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of brigade rows deleted (0 or 1)
    pub async fn delete_with_inventory(&self, id: i32) -> Result<u64, DbErr> {
        let mut statements: Vec<SqlStatement> = Category::ALL
            .into_iter()
            .map(|category| {
                SqlStatement::new(
                    format!("DELETE FROM {} WHERE brigada_id = @param0", category.table()),
                    vec![id.into()],
                )
            })
            .collect();
        statements.push(SqlStatement::new(
            "DELETE FROM brigadas WHERE id = @param0",
            vec![id.into()],
        ));

        let results = self.sql.run_transaction(statements).await?;

        Ok(results.last().map(|r| r.rows_affected).unwrap_or(0))
    }
}
