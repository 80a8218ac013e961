//! `Store`, the public surface of the data-access layer.
//!
//! A `Store` is built around an injected [`QueryExecutor`]; the caller owns
//! the handle's lifecycle.  Cloning a store shares the same handle.

use std::sync::Arc;

use crate::{
    executor::QueryExecutor,
    models::{NewProperty, NewUser, Property, PropertyFilter, Reservation, User},
    repository::{properties, reservations, users},
    DbError,
};

#[derive(Clone)]
pub struct Store {
    executor: Arc<dyn QueryExecutor>,
}

impl Store {
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        Self { executor }
    }

    fn db(&self) -> &dyn QueryExecutor {
        self.executor.as_ref()
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<User, DbError> {
        users::get_user_by_email(self.db(), email).await
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<User, DbError> {
        users::get_user_by_id(self.db(), id).await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User, DbError> {
        users::create_user(self.db(), user).await
    }

    pub async fn list_reservations_for_guest(
        &self,
        guest_id: i64,
        limit: i64,
    ) -> Result<Vec<Reservation>, DbError> {
        reservations::list_reservations_for_guest(self.db(), guest_id, limit).await
    }

    /// See [`properties::search_properties`].
    pub async fn search_properties(
        &self,
        filter: Option<&PropertyFilter>,
        limit: i64,
    ) -> Result<Vec<Property>, DbError> {
        properties::search_properties(self.db(), filter, limit).await
    }

    pub async fn create_property(&self, property: &NewProperty) -> Result<Property, DbError> {
        properties::create_property(self.db(), property).await
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
