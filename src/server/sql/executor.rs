use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, QueryResult, Statement,
    TransactionTrait, Value,
};

use crate::server::sql::dialect::{returns_rows, Dialect};

/// Uniform result of a single statement: the returned rows plus the affected-row count.
///
/// For statements that return rows the count equals the number of rows returned.
pub struct QueryOutcome<T = QueryResult> {
    pub rows: Vec<T>,
    pub rows_affected: u64,
}

impl<T> QueryOutcome<T> {
    /// Takes the first returned row, if any
    pub fn into_first(self) -> Option<T> {
        self.rows.into_iter().next()
    }
}

impl QueryOutcome<QueryResult> {
    /// Decodes the raw rows into a typed model
    pub fn decode<T: FromQueryResult>(self) -> Result<QueryOutcome<T>, DbErr> {
        let rows = self
            .rows
            .iter()
            .map(|row| T::from_query_result(row, ""))
            .collect::<Result<Vec<T>, DbErr>>()?;

        Ok(QueryOutcome {
            rows,
            rows_affected: self.rows_affected,
        })
    }
}

/// Query text plus its positional parameters, as submitted to a transaction
#[derive(Clone, Debug)]
pub struct SqlStatement {
    pub sql: String,
    pub params: Vec<Value>,
}

impl SqlStatement {
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }
}

impl From<&str> for SqlStatement {
    fn from(sql: &str) -> Self {
        Self::new(sql, Vec::new())
    }
}

impl From<String> for SqlStatement {
    fn from(sql: String) -> Self {
        Self::new(sql, Vec::new())
    }
}

/// Executes T-SQL flavored statements against the connection pool.
///
/// Owns the pool handle and the dialect selected at startup. Cloning is cheap and shares
/// the same pool. Failures are returned unchanged with no retry.
#[derive(Clone)]
pub struct SqlExecutor {
    db: DatabaseConnection,
    dialect: Dialect,
}

impl SqlExecutor {
    /// Wraps a connection pool, selecting the dialect from its backend.
    ///
    /// # Returns
    /// - `Ok(SqlExecutor)` - Backend is PostgreSQL or SQLite
    /// - `Err(DbErr::Custom)` - Backend is not supported
    pub fn new(db: DatabaseConnection) -> Result<Self, DbErr> {
        let dialect = Dialect::for_backend(db.get_database_backend())?;

        Ok(Self { db, dialect })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Translates and executes one statement, returning raw rows and the affected-row count.
    pub async fn execute(&self, sql: &str, params: Vec<Value>) -> Result<QueryOutcome, DbErr> {
        run_statement(&self.db, self.dialect, sql, params).await
    }

    /// Executes a statement and decodes every returned row
    pub async fn fetch_all<T: FromQueryResult>(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Vec<T>, DbErr> {
        Ok(self.execute(sql, params).await?.decode::<T>()?.rows)
    }

    /// Executes a statement and decodes the first returned row, if any
    pub async fn fetch_optional<T: FromQueryResult>(
        &self,
        sql: &str,
        params: Vec<Value>,
    ) -> Result<Option<T>, DbErr> {
        Ok(self.execute(sql, params).await?.decode::<T>()?.into_first())
    }

    /// Stored procedures are not available on the relational backends this executor
    /// targets; the call always fails without touching the pool.
    pub async fn execute_procedure(
        &self,
        procedure: &str,
        _params: Vec<(String, Value)>,
    ) -> Result<QueryOutcome, DbErr> {
        Err(DbErr::Custom(format!(
            "Cannot execute stored procedure {}: stored procedures are not supported on {}",
            procedure, self.dialect
        )))
    }

    /// Runs statements in order inside a single transaction.
    ///
    /// All statements share one connection. On the first failure the transaction is rolled
    /// back, the remaining statements are not attempted and the failure is returned. The
    /// connection goes back to the pool in every case.
    ///
    /// # Returns
    /// - `Ok(Vec<QueryOutcome>)` - One outcome per statement, in submission order
    /// - `Err(DbErr)` - The error raised by the failing statement or by the commit
    pub async fn run_transaction(
        &self,
        statements: Vec<SqlStatement>,
    ) -> Result<Vec<QueryOutcome>, DbErr> {
        let txn = self.db.begin().await?;
        let mut results = Vec::with_capacity(statements.len());

        for (index, statement) in statements.into_iter().enumerate() {
            match run_statement(&txn, self.dialect, &statement.sql, statement.params).await {
                Ok(outcome) => results.push(outcome),
                Err(err) => {
                    tracing::warn!(
                        "Rolling back transaction after statement {} failed: {}",
                        index,
                        err
                    );

                    if let Err(rollback_err) = txn.rollback().await {
                        tracing::error!("Failed to roll back transaction: {}", rollback_err);
                    }

                    return Err(err);
                }
            }
        }

        txn.commit().await?;

        Ok(results)
    }

    /// Closes every pooled connection
    pub async fn close(self) -> Result<(), DbErr> {
        self.db.close().await
    }
}

async fn run_statement<C: ConnectionTrait>(
    conn: &C,
    dialect: Dialect,
    sql: &str,
    params: Vec<Value>,
) -> Result<QueryOutcome, DbErr> {
    let translated = dialect.translate(sql);
    tracing::debug!(sql = %translated, params = params.len(), "executing statement");

    let row_query = returns_rows(&translated);
    let statement = Statement::from_sql_and_values(dialect.backend(), translated, params);

    if row_query {
        let rows = conn.query_all_raw(statement).await?;

        Ok(QueryOutcome {
            rows_affected: rows.len() as u64,
            rows,
        })
    } else {
        let result = conn.execute_raw(statement).await?;

        Ok(QueryOutcome {
            rows: Vec::new(),
            rows_affected: result.rows_affected(),
        })
    }
}
