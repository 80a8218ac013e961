//! `db` crate: the LightBnB data-access layer.
//!
//! Provides a statement builder for property search, typed row structs,
//! repository functions for users, reservations and properties, and the
//! [`QueryExecutor`] seam those functions run through.  The composition root
//! builds a [`PgExecutor`] (or a [`mock::MockExecutor`] in tests) and injects
//! it into a [`Store`].

pub mod error;
pub mod executor;
pub mod mock;
pub mod models;
pub mod pool;
pub mod query;
pub mod repository;
pub mod statement;
pub mod store;

pub use error::DbError;
pub use executor::{PgExecutor, QueryExecutor, Row};
pub use models::{NewProperty, NewUser, Property, PropertyFilter, Reservation, User};
pub use pool::{create_pool, DbPool, PoolConfig};
pub use query::{build_property_search, DEFAULT_LIMIT};
pub use statement::{Param, Statement};
pub use store::Store;
