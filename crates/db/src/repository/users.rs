//! User lookups and inserts.

use tracing::{instrument, warn};

use crate::{
    executor::QueryExecutor,
    models::{NewUser, User},
    statement::Statement,
    DbError,
};

use super::decode_first;

/// Fetch a single user by exact email.
///
/// Returns `DbError::NotFound` if no user has that email.
#[instrument(skip(db))]
pub async fn get_user_by_email(db: &dyn QueryExecutor, email: &str) -> Result<User, DbError> {
    let stmt = Statement::new("SELECT * FROM users WHERE email = $1").bind(email);
    decode_first(db.execute(&stmt).await?).inspect_err(|e| {
        if matches!(e, DbError::NotFound) {
            warn!("no user with that email");
        }
    })
}

/// Fetch a single user by primary key.
///
/// Returns `DbError::NotFound` if the id is unknown.
#[instrument(skip(db))]
pub async fn get_user_by_id(db: &dyn QueryExecutor, id: i64) -> Result<User, DbError> {
    let stmt = Statement::new("SELECT * FROM users WHERE id = $1").bind(id);
    decode_first(db.execute(&stmt).await?).inspect_err(|e| {
        if matches!(e, DbError::NotFound) {
            warn!("no user with that id");
        }
    })
}

/// Insert a new user and return the stored row.
///
/// The password is stored as given; hashing belongs to the caller.
#[instrument(skip(db, user), fields(email = %user.email))]
pub async fn create_user(db: &dyn QueryExecutor, user: &NewUser) -> Result<User, DbError> {
    let stmt = Statement::new(
        r#"INSERT INTO users (name, email, password)
VALUES ($1, $2, $3)
RETURNING *"#,
    )
    .bind(user.name.as_str())
    .bind(user.email.as_str())
    .bind(user.password.as_str());

    decode_first(db.execute(&stmt).await?)
}
