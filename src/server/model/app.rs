use crate::server::sql::SqlExecutor;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub sql: SqlExecutor,
}

impl AppState {
    pub fn new(sql: SqlExecutor) -> Self {
        Self { sql }
    }
}
