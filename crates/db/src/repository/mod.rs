//! Repository functions, one per database operation.
//!
//! Every function takes a `&dyn QueryExecutor` and returns a
//! `Result<T, DbError>`.  No business logic: a statement in, typed rows out.

pub mod properties;
pub mod reservations;
pub mod users;

#[cfg(test)]
mod properties_tests;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::executor::Row;
use crate::DbError;

/// Decode every row into `T`.
pub(crate) fn decode_all<T: DeserializeOwned>(rows: Vec<Row>) -> Result<Vec<T>, DbError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(Value::Object(row)).map_err(DbError::from))
        .collect()
}

/// Decode the first row into `T`; zero rows is [`DbError::NotFound`].
pub(crate) fn decode_first<T: DeserializeOwned>(rows: Vec<Row>) -> Result<T, DbError> {
    let row = rows.into_iter().next().ok_or(DbError::NotFound)?;
    Ok(serde_json::from_value(Value::Object(row))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::row;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Pair {
        id: i64,
        name: String,
    }

    #[test]
    fn decode_first_takes_the_first_row() {
        let rows = vec![
            row(json!({ "id": 1, "name": "a" })),
            row(json!({ "id": 2, "name": "b" })),
        ];
        let pair: Pair = decode_first(rows).unwrap();
        assert_eq!(pair, Pair { id: 1, name: "a".into() });
    }

    #[test]
    fn decode_first_of_nothing_is_not_found() {
        let result = decode_first::<Pair>(Vec::new());
        assert!(matches!(result, Err(DbError::NotFound)));
    }

    #[test]
    fn shape_mismatch_is_a_decode_error() {
        let result = decode_all::<Pair>(vec![row(json!({ "id": "one" }))]);
        assert!(matches!(result, Err(DbError::Decode(_))));
    }
}
