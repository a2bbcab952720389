//! Dialect translation for T-SQL flavored statements.
//!
//! Statements are rewritten in three fixed passes:
//! 1. `GETDATE()` becomes the target's current timestamp expression.
//! 2. `OUTPUT INSERTED.*` is removed; INSERT and UPDATE statements get a trailing
//!    `RETURNING *` instead unless one is already present. Other statements lose the
//!    returning behavior.
//! 3. `@paramN` placeholders become the target's numbered placeholder for `N + 1`.

use std::fmt;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use sea_orm::{DbBackend, DbErr};

static CURRENT_TIMESTAMP_FN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bGETDATE\s*\(\s*\)").unwrap());

static OUTPUT_INSERTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*\bOUTPUT\s+INSERTED\.\*").unwrap());

static RETURNING_CLAUSE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bRETURNING\b").unwrap());

static INSERT_OR_UPDATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(INSERT|UPDATE)\b").unwrap());

static ROW_QUERY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*(SELECT|WITH)\b").unwrap());

static POSITIONAL_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)@param(\d+)").unwrap());

/// Target SQL dialect, chosen once from the connected backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    /// PostgreSQL: `NOW()` and `$N` placeholders
    Postgres,
    /// SQLite: `CURRENT_TIMESTAMP` and `?N` placeholders
    Sqlite,
}

impl Dialect {
    /// Selects the dialect for a sea-orm backend.
    ///
    /// # Returns
    /// - `Ok(Dialect)` - Backend is supported
    /// - `Err(DbErr::Custom)` - Backend has no translation target (MySQL)
    pub fn for_backend(backend: DbBackend) -> Result<Self, DbErr> {
        match backend {
            DbBackend::Postgres => Ok(Dialect::Postgres),
            DbBackend::Sqlite => Ok(Dialect::Sqlite),
            other => Err(DbErr::Custom(format!(
                "Unsupported database backend {:?}, expected PostgreSQL or SQLite",
                other
            ))),
        }
    }

    pub fn backend(self) -> DbBackend {
        match self {
            Dialect::Postgres => DbBackend::Postgres,
            Dialect::Sqlite => DbBackend::Sqlite,
        }
    }

    fn current_timestamp(self) -> &'static str {
        match self {
            Dialect::Postgres => "NOW()",
            Dialect::Sqlite => "CURRENT_TIMESTAMP",
        }
    }

    fn placeholder_prefix(self) -> &'static str {
        match self {
            Dialect::Postgres => "$",
            Dialect::Sqlite => "?",
        }
    }

    /// Rewrites a T-SQL flavored statement for this dialect.
    ///
    /// Applying the translation to its own output yields the same text.
    pub fn translate(self, sql: &str) -> String {
        let sql = CURRENT_TIMESTAMP_FN.replace_all(sql, self.current_timestamp());
        let sql = rewrite_output_clause(&sql);

        let prefix = self.placeholder_prefix();
        POSITIONAL_PARAM
            .replace_all(&sql, |caps: &Captures| match caps[1].parse::<usize>() {
                Ok(index) => format!("{}{}", prefix, index + 1),
                Err(_) => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Postgres => f.write_str("PostgreSQL"),
            Dialect::Sqlite => f.write_str("SQLite"),
        }
    }
}

fn rewrite_output_clause(sql: &str) -> String {
    if !OUTPUT_INSERTED.is_match(sql) {
        return sql.to_string();
    }

    let stripped = OUTPUT_INSERTED.replace_all(sql, "");

    if !INSERT_OR_UPDATE.is_match(&stripped) || RETURNING_CLAUSE.is_match(&stripped) {
        return stripped.into_owned();
    }

    let body = stripped.trim_end().trim_end_matches(';').trim_end();
    format!("{} RETURNING *", body)
}

/// Whether a translated statement produces a row set (queries and `RETURNING` statements).
pub fn returns_rows(sql: &str) -> bool {
    ROW_QUERY.is_match(sql) || RETURNING_CLAUSE.is_match(sql)
}
