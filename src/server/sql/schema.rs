//! Table definitions for bootstrapping an empty database.
//!
//! Statements are built with sea-query so the same definitions render for PostgreSQL and
//! SQLite. Every table is created with `IF NOT EXISTS`; existing tables are left untouched.

use sea_orm::{
    sea_query::{Alias, ColumnDef, Expr, ForeignKey, Table, TableCreateStatement},
    ConnectionTrait, DbErr,
};

use crate::{model::inventory::Category, server::sql::SqlExecutor};

fn id_column() -> ColumnDef {
    ColumnDef::new(Alias::new("id"))
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

fn timestamp_column(name: &str) -> ColumnDef {
    ColumnDef::new(Alias::new(name))
        .timestamp()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

fn brigades_table() -> TableCreateStatement {
    Table::create()
        .table(Alias::new("brigadas"))
        .if_not_exists()
        .col(id_column())
        .col(ColumnDef::new(Alias::new("nombre")).string().not_null())
        .col(
            ColumnDef::new(Alias::new("cantidad_bomberos_activos"))
                .integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Alias::new("contacto_celular_comandante")).string().null())
        .col(ColumnDef::new(Alias::new("encargado_logistica")).string().null())
        .col(ColumnDef::new(Alias::new("contacto_celular_logistica")).string().null())
        .col(ColumnDef::new(Alias::new("numero_emergencia_publico")).string().null())
        .col(timestamp_column("created_at"))
        .col(timestamp_column("updated_at"))
        .to_owned()
}

fn sizes_table() -> TableCreateStatement {
    Table::create()
        .table(Alias::new("tallas"))
        .if_not_exists()
        .col(id_column())
        .col(
            ColumnDef::new(Alias::new("codigo"))
                .string()
                .not_null()
                .unique_key(),
        )
        .col(ColumnDef::new(Alias::new("descripcion")).string().not_null())
        .col(ColumnDef::new(Alias::new("numero_equivalente")).integer().null())
        .col(timestamp_column("created_at"))
        .col(timestamp_column("updated_at"))
        .to_owned()
}

fn resource_types_table() -> TableCreateStatement {
    Table::create()
        .table(Alias::new("tipos_recursos"))
        .if_not_exists()
        .col(id_column())
        .col(ColumnDef::new(Alias::new("categoria")).string().not_null())
        .col(ColumnDef::new(Alias::new("nombre")).string().not_null())
        .col(
            ColumnDef::new(Alias::new("requiere_talla"))
                .boolean()
                .not_null()
                .default(false),
        )
        .col(
            ColumnDef::new(Alias::new("requiere_cantidad"))
                .boolean()
                .not_null()
                .default(true),
        )
        .col(
            ColumnDef::new(Alias::new("activo"))
                .boolean()
                .not_null()
                .default(true),
        )
        .col(timestamp_column("created_at"))
        .col(timestamp_column("updated_at"))
        .to_owned()
}

/// Inventory tables share one column set; `talla_id` is only written for PPE and
/// `monto_aproximado` only for logistics.
fn inventory_table(category: Category) -> TableCreateStatement {
    let table = category.table();

    Table::create()
        .table(Alias::new(table))
        .if_not_exists()
        .col(id_column())
        .col(ColumnDef::new(Alias::new("brigada_id")).integer().not_null())
        .col(ColumnDef::new(Alias::new("tipo_recurso_id")).integer().not_null())
        .col(ColumnDef::new(Alias::new("talla_id")).integer().null())
        .col(
            ColumnDef::new(Alias::new("cantidad"))
                .integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Alias::new("monto_aproximado")).double().null())
        .col(ColumnDef::new(Alias::new("observaciones")).text().null())
        .col(timestamp_column("created_at"))
        .col(timestamp_column("updated_at"))
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk-{}-brigada_id", table))
                .from(Alias::new(table), Alias::new("brigada_id"))
                .to(Alias::new("brigadas"), Alias::new("id")),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk-{}-tipo_recurso_id", table))
                .from(Alias::new(table), Alias::new("tipo_recurso_id"))
                .to(Alias::new("tipos_recursos"), Alias::new("id")),
        )
        .foreign_key(
            ForeignKey::create()
                .name(format!("fk-{}-talla_id", table))
                .from(Alias::new(table), Alias::new("talla_id"))
                .to(Alias::new("tallas"), Alias::new("id")),
        )
        .to_owned()
}

/// Every table in creation order, parents first
pub fn tables() -> Vec<TableCreateStatement> {
    let mut tables = vec![brigades_table(), sizes_table(), resource_types_table()];
    tables.extend(Category::ALL.into_iter().map(inventory_table));
    tables
}

/// Creates any missing table on the executor's backend
pub async fn create_schema(sql: &SqlExecutor) -> Result<(), DbErr> {
    let db = sql.connection();

    for table in tables() {
        db.execute(&table).await?;
    }

    tracing::info!("Database schema is in place for {}", sql.dialect());

    Ok(())
}
