//! The `QueryExecutor` trait, the execution handle every repository
//! function runs its statement through, and its Postgres implementation.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::types::Json;
use tracing::debug;

use crate::pool::DbPool;
use crate::statement::{Param, Statement};
use crate::DbError;

/// One result row, keyed by column name.
pub type Row = Map<String, Value>;

/// Runs a parameterized statement and hands back its rows.
///
/// Implementations own connection lifecycle and timeouts; callers see a
/// single awaitable unit of work per statement.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, statement: &Statement) -> Result<Vec<Row>, DbError>;
}

/// [`QueryExecutor`] backed by a Postgres pool.
///
/// Each statement is wrapped in a CTE and returned through `row_to_json`, so
/// rows of any shape come back as JSON objects.  Writes must therefore carry
/// a `RETURNING` clause.
#[derive(Debug, Clone)]
pub struct PgExecutor {
    pool: DbPool,
}

impl PgExecutor {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryExecutor for PgExecutor {
    async fn execute(&self, statement: &Statement) -> Result<Vec<Row>, DbError> {
        let sql = wrap_as_json(statement);
        debug!(params = statement.params().len(), "executing statement:\n{}", statement.text());

        let mut query = sqlx::query_scalar::<_, Json<Value>>(&sql);
        for param in statement.params() {
            query = match param {
                Param::Null => query.bind(None::<String>),
                Param::Text(s) => query.bind(s.as_str()),
                Param::Int(n) => query.bind(*n),
                Param::Float(f) => query.bind(*f),
            };
        }

        let rows = query.fetch_all(&self.pool).await?;
        into_rows(rows.into_iter().map(|Json(value)| value))
    }
}

/// Re-select the statement's rows as JSON objects.  A CTE does not carry
/// its ORDER BY to the outer query, so a declared sort column is applied
/// again outside.
fn wrap_as_json(statement: &Statement) -> String {
    let mut sql = format!(
        "WITH result AS ({}) SELECT row_to_json(result) FROM result",
        statement.text()
    );
    if let Some(column) = statement.order_by() {
        sql.push_str(&format!(" ORDER BY result.{column} ASC"));
    }
    sql
}

/// Every value must be a JSON object; anything else is a decode error.
fn into_rows(values: impl IntoIterator<Item = Value>) -> Result<Vec<Row>, DbError> {
    values
        .into_iter()
        .map(|value| serde_json::from_value::<Row>(value).map_err(DbError::from))
        .collect()
}
