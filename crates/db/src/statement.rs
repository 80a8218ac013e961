//! Parameterized statements: SQL text plus its positional arguments.

use serde::Serialize;

/// A value bound to a `$n` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Param {
    Null,
    Text(String),
    Int(i64),
    Float(f64),
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Option<String>> for Param {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Text)
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Statement text and the values for its placeholders, in position order:
/// `params[0]` binds `$1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    text: String,
    params: Vec<Param>,
    /// Output column the rows are sorted by, for executors that re-select
    /// the statement's rows and must restore their order.
    order_by: Option<&'static str>,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), params: Vec::new(), order_by: None }
    }

    pub(crate) fn from_parts(text: String, params: Vec<Param>) -> Self {
        Self { text, params, order_by: None }
    }

    /// Declare that the statement returns rows sorted ascending by `column`.
    pub fn ordered_by(mut self, column: &'static str) -> Self {
        self.order_by = Some(column);
        self
    }

    /// Append the value for the next placeholder.
    pub fn bind(mut self, value: impl Into<Param>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn order_by(&self) -> Option<&'static str> {
        self.order_by
    }
}
