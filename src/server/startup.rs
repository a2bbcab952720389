use sea_orm::{ConnectOptions, Database};

use crate::server::{
    config::Config,
    error::Error,
    sql::{schema::create_schema, SqlExecutor},
};

/// Connect to the database and select the SQL dialect for its backend.
///
/// Creates any missing tables when `DB_BOOTSTRAP_SCHEMA` is enabled. Schema changes to
/// existing tables are not applied.
pub async fn connect_to_database(config: &Config) -> Result<SqlExecutor, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.max_connections)
        .connect_timeout(config.connect_timeout)
        .idle_timeout(config.idle_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    let sql = SqlExecutor::new(db)?;

    tracing::info!("Connected to {} database", sql.dialect());

    if config.bootstrap_schema {
        create_schema(&sql).await?;

        tracing::info!("Database schema bootstrapped");
    }

    Ok(sql)
}
