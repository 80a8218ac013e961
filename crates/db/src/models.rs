//! Row structs that map onto the LightBnB tables, plus the input records
//! callers hand to the insert operations.
//!
//! These are *persistence* models; they carry no behaviour.  Rows arrive
//! from a [`crate::QueryExecutor`] as JSON objects and are decoded with serde.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

/// A persisted user row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Stored exactly as supplied; never written back out.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Attributes for a user that does not exist yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// properties
// ---------------------------------------------------------------------------

/// A property row, augmented with the mean of its review ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    /// Nightly cost in the store's currency unit.
    pub cost_per_night: i64,
    pub street: Option<String>,
    pub city: String,
    pub province: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    /// `None` when the property has no reviews, or when the row came from an
    /// insert rather than a search.
    #[serde(default)]
    pub average_rating: Option<f64>,
}

/// Attributes for a listing that does not exist yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProperty {
    pub owner_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: Option<String>,
    pub cover_photo_url: Option<String>,
    pub cost_per_night: i64,
    pub street: Option<String>,
    pub city: String,
    pub province: Option<String>,
    pub post_code: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
}

/// Sparse property-search constraints.  Every field is optional; a field
/// that is set becomes exactly one predicate in the search statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyFilter {
    /// Case-insensitive substring of the city name.  An empty string counts
    /// as unset.
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub minimum_price_per_night: Option<i64>,
    #[serde(default)]
    pub maximum_price_per_night: Option<i64>,
    /// Lower bound on the mean review rating (1–5).
    #[serde(default)]
    pub minimum_rating: Option<f64>,
}

// ---------------------------------------------------------------------------
// reservations
// ---------------------------------------------------------------------------

/// A reservation joined with the property it books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub reservation_id: i64,
    pub guest_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(flatten)]
    pub property: Property,
}
