//! Property search and listing inserts.

use tracing::{debug, instrument};

use crate::{
    executor::QueryExecutor,
    models::{NewProperty, Property, PropertyFilter},
    query::build_property_search,
    statement::Statement,
    DbError,
};

use super::{decode_all, decode_first};

/// Return up to `limit` properties matching `filter`, cheapest per night
/// first, each carrying its `average_rating`.
///
/// Ties on `cost_per_night` come back in no particular order.  Execution
/// failures propagate; they are never turned into an empty result.
#[instrument(skip(db))]
pub async fn search_properties(
    db: &dyn QueryExecutor,
    filter: Option<&PropertyFilter>,
    limit: i64,
) -> Result<Vec<Property>, DbError> {
    let stmt = build_property_search(filter, limit);
    debug!(params = stmt.params().len(), "property search assembled");

    let properties: Vec<Property> = decode_all(db.execute(&stmt).await?)?;
    debug!(found = properties.len(), "property search finished");
    Ok(properties)
}

/// Insert a new listing and return it with its store-assigned id.
#[instrument(skip(db, property), fields(owner_id = property.owner_id, city = %property.city))]
pub async fn create_property(
    db: &dyn QueryExecutor,
    property: &NewProperty,
) -> Result<Property, DbError> {
    let stmt = Statement::new(
        r#"INSERT INTO properties (
    owner_id, title, description, thumbnail_photo_url, cover_photo_url,
    cost_per_night, street, city, province, post_code, country,
    parking_spaces, number_of_bathrooms, number_of_bedrooms
)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
RETURNING *"#,
    )
    .bind(property.owner_id)
    .bind(property.title.as_str())
    .bind(property.description.clone())
    .bind(property.thumbnail_photo_url.clone())
    .bind(property.cover_photo_url.clone())
    .bind(property.cost_per_night)
    .bind(property.street.clone())
    .bind(property.city.as_str())
    .bind(property.province.clone())
    .bind(property.post_code.clone())
    .bind(property.country.clone())
    .bind(property.parking_spaces)
    .bind(property.number_of_bathrooms)
    .bind(property.number_of_bedrooms);

    decode_first(db.execute(&stmt).await?)
}
