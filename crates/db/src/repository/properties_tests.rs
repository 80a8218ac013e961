//! Tests for property search and listing inserts.
//!
//! These run against `MockExecutor`, so no Postgres connection is needed.
//! The fixture rows mirror what `row_to_json` returns for the seed data.

use serde_json::json;

use crate::mock::{row, MockExecutor, MockResponse};
use crate::models::{NewProperty, PropertyFilter};
use crate::repository::properties::{create_property, search_properties};
use crate::statement::Param;
use crate::DbError;

const FIXTURE: &str = include_str!("../../fixtures/properties.json");

fn cabin() -> NewProperty {
    NewProperty {
        owner_id: 7,
        title: "Lakeside cabin".into(),
        description: Some("Quiet".into()),
        thumbnail_photo_url: None,
        cover_photo_url: None,
        cost_per_night: 12000,
        street: Some("1 Lake Rd".into()),
        city: "Vancouver".into(),
        province: Some("BC".into()),
        post_code: Some("V5K".into()),
        country: Some("Canada".into()),
        parking_spaces: 1,
        number_of_bathrooms: 1,
        number_of_bedrooms: 2,
    }
}

// ============================================================
// search_properties
// ============================================================

#[tokio::test]
async fn fixture_rows_decode_with_average_rating() {
    let mock = MockExecutor::from_fixture(FIXTURE).expect("fixture parses");

    let properties = search_properties(&mock, None, 10).await.unwrap();

    assert_eq!(properties.len(), 3);
    assert_eq!(properties[0].title, "Speed lamp");
    assert_eq!(properties[0].average_rating, Some(3.8));
    // No reviews still yields a row, just without a rating.
    assert_eq!(properties[1].average_rating, None);
}

#[tokio::test]
async fn search_sends_the_assembled_statement() {
    let mock = MockExecutor::new();
    let filter = PropertyFilter {
        city: Some("Vancouver".into()),
        ..Default::default()
    };

    search_properties(&mock, Some(&filter), 5).await.unwrap();

    assert_eq!(mock.call_count(), 1);
    let stmt = mock.last_statement().unwrap();
    assert!(stmt.text().contains("WHERE city ILIKE $1"));
    assert!(stmt.text().ends_with("LIMIT $2"));
    assert_eq!(
        stmt.params(),
        &[Param::Text("%Vancouver%".into()), Param::Int(5)]
    );
}

#[tokio::test]
async fn search_failure_propagates_as_query_execution() {
    let mock = MockExecutor::failing("invalid input syntax for type integer");

    let result = search_properties(&mock, Some(&PropertyFilter::default()), 10).await;

    assert!(matches!(result, Err(DbError::QueryExecution(_))));
}

#[tokio::test]
async fn search_without_matches_is_an_empty_success() {
    let mock = MockExecutor::new();
    let filter = PropertyFilter {
        minimum_rating: Some(5.0),
        ..Default::default()
    };

    let properties = search_properties(&mock, Some(&filter), 10).await.unwrap();

    assert!(properties.is_empty());
}

#[tokio::test]
async fn concurrent_searches_do_not_interfere() {
    let mock = MockExecutor::new();
    let cheap = PropertyFilter {
        maximum_price_per_night: Some(100),
        ..Default::default()
    };
    let owned = PropertyFilter {
        owner_id: Some(3),
        ..Default::default()
    };

    let (a, b) = tokio::join!(
        search_properties(&mock, Some(&cheap), 1),
        search_properties(&mock, Some(&owned), 2),
    );
    a.unwrap();
    b.unwrap();

    let calls = mock.calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    for stmt in calls.iter() {
        assert_eq!(stmt.params().len(), 2);
        assert!(stmt.text().contains("\nWHERE "));
    }
}

// ============================================================
// create_property
// ============================================================

#[tokio::test]
async fn create_property_returns_assigned_id() {
    let mock = MockExecutor::returning(vec![row(json!({
        "id": 42,
        "owner_id": 7,
        "title": "Lakeside cabin",
        "description": "Quiet",
        "thumbnail_photo_url": null,
        "cover_photo_url": null,
        "cost_per_night": 12000,
        "street": "1 Lake Rd",
        "city": "Vancouver",
        "province": "BC",
        "post_code": "V5K",
        "country": "Canada",
        "parking_spaces": 1,
        "number_of_bathrooms": 1,
        "number_of_bedrooms": 2,
        "active": true
    }))]);

    let created = create_property(&mock, &cabin()).await.unwrap();

    assert_eq!(created.id, 42);
    assert_eq!(created.city, "Vancouver");
    assert_eq!(created.average_rating, None);
}

#[tokio::test]
async fn create_property_binds_fourteen_columns_in_order() {
    let mock = MockExecutor::new();

    // The mock answers with no rows, which surfaces as NotFound; only the
    // statement matters here.
    let result = create_property(&mock, &cabin()).await;
    assert!(matches!(result, Err(DbError::NotFound)));

    let stmt = mock.last_statement().unwrap();
    assert!(stmt.text().contains("$14)"));
    assert!(stmt.text().ends_with("RETURNING *"));
    let params = stmt.params();
    assert_eq!(params.len(), 14);
    assert_eq!(params[0], Param::Int(7));
    assert_eq!(params[1], Param::Text("Lakeside cabin".into()));
    assert_eq!(params[3], Param::Null);
    assert_eq!(params[5], Param::Int(12000));
    assert_eq!(params[7], Param::Text("Vancouver".into()));
    assert_eq!(params[13], Param::Int(2));
}

#[tokio::test]
async fn scripted_responses_are_replayed_in_order() {
    let mock = MockExecutor::failing("deadlock detected")
        .then(MockResponse::Rows(Vec::new()));

    assert!(search_properties(&mock, None, 10).await.is_err());
    assert!(search_properties(&mock, None, 10).await.unwrap().is_empty());
    assert_eq!(mock.call_count(), 2);
}
