//! `MockExecutor`: a test double for `QueryExecutor`.
//!
//! Records every statement it receives and answers from a script of
//! canned responses.  Loading the script from a JSON fixture gives the
//! fixture-backed store variant without a second code path.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use serde_json::Value;

use crate::executor::{QueryExecutor, Row};
use crate::statement::Statement;
use crate::DbError;

/// What the mock answers for one call.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Succeed with these rows.
    Rows(Vec<Row>),
    /// Fail as the driver would.
    Fail(String),
}

/// A mock execution handle that records each call and replays a
/// programmer-specified script.  Once the script runs out, every further
/// call succeeds with no rows.
#[derive(Debug, Clone, Default)]
pub struct MockExecutor {
    script: Arc<Mutex<VecDeque<MockResponse>>>,
    /// All statements seen by this executor (in call order).
    pub calls: Arc<Mutex<Vec<Statement>>>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockExecutor {
    /// Create a mock that answers with no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose first call returns `rows`.
    pub fn returning(rows: Vec<Row>) -> Self {
        Self::new().then(MockResponse::Rows(rows))
    }

    /// Create a mock whose first call fails with `msg`.
    pub fn failing(msg: impl Into<String>) -> Self {
        Self::new().then(MockResponse::Fail(msg.into()))
    }

    /// Create a mock whose first call returns the rows of a JSON array of
    /// objects, e.g. a seed file.
    pub fn from_fixture(json: &str) -> Result<Self, DbError> {
        let rows: Vec<Row> = serde_json::from_str(json)?;
        Ok(Self::returning(rows))
    }

    /// Queue another response after the ones already scripted.
    pub fn then(self, response: MockResponse) -> Self {
        lock(&self.script).push_back(response);
        self
    }

    /// Number of statements executed so far.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }

    /// The most recent statement, if any.
    pub fn last_statement(&self) -> Option<Statement> {
        lock(&self.calls).last().cloned()
    }
}

#[async_trait]
impl QueryExecutor for MockExecutor {
    async fn execute(&self, statement: &Statement) -> Result<Vec<Row>, DbError> {
        lock(&self.calls).push(statement.clone());

        match lock(&self.script).pop_front() {
            Some(MockResponse::Rows(rows)) => Ok(rows),
            Some(MockResponse::Fail(msg)) => Err(DbError::QueryExecution(sqlx::Error::Protocol(msg))),
            None => Ok(Vec::new()),
        }
    }
}

/// Build a [`Row`] from a `json!({...})` literal.  Non-objects become an
/// empty row.
pub fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        _ => Row::new(),
    }
}
