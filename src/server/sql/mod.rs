//! SQL execution layer.
//!
//! Call sites write their statements once in a T-SQL flavored dialect (`OUTPUT INSERTED.*`,
//! `GETDATE()`, `@paramN` placeholders). The [`SqlExecutor`] translates each statement for the
//! backend chosen at startup through [`Dialect`] before binding the parameters and running it
//! against the connection pool.

pub mod dialect;
pub mod executor;
pub mod schema;
pub mod update;

pub use dialect::Dialect;
pub use executor::{QueryOutcome, SqlExecutor, SqlStatement};
pub use update::UpdateBuilder;
