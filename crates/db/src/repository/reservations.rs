//! Reservation listing.

use tracing::instrument;

use crate::{executor::QueryExecutor, models::Reservation, statement::Statement, DbError};

use super::decode_all;

/// Return up to `limit` reservations made by `guest_id`, earliest stay
/// first, each joined with the property it books.
#[instrument(skip(db))]
pub async fn list_reservations_for_guest(
    db: &dyn QueryExecutor,
    guest_id: i64,
    limit: i64,
) -> Result<Vec<Reservation>, DbError> {
    let stmt = Statement::new(
        r#"SELECT properties.*,
    reservations.id AS reservation_id,
    reservations.guest_id,
    reservations.start_date,
    reservations.end_date,
    avg(property_reviews.rating) AS average_rating
FROM reservations
JOIN properties ON reservations.property_id = properties.id
LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
WHERE reservations.guest_id = $1
GROUP BY properties.id, reservations.id
ORDER BY reservations.start_date ASC
LIMIT $2"#,
    )
    .bind(guest_id)
    .bind(limit)
    .ordered_by("start_date");

    decode_all(db.execute(&stmt).await?)
}
