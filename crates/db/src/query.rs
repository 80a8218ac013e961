//! Property-search statement builder.
//!
//! The statement is assembled from an ordered list of predicate steps.  Each
//! step is a pure function that looks at one field of the [`PropertyFilter`]
//! and either yields a `Condition` or nothing.  Fired conditions are folded
//! left to right into a `Clauses` accumulator, which assigns placeholder
//! positions in push order and keeps WHERE fragments apart from HAVING
//! fragments.  Rendering decides `WHERE` vs `AND` purely by fragment
//! position, so the keyword never depends on which filters were absent.

use crate::models::PropertyFilter;
use crate::statement::{Param, Statement};

/// Row cap used when the caller has no opinion.
pub const DEFAULT_LIMIT: i64 = 10;

const SELECT_PROPERTIES: &str = "SELECT properties.*, avg(property_reviews.rating) AS average_rating
FROM properties
LEFT JOIN property_reviews ON properties.id = property_reviews.property_id";

const AVERAGE_RATING: &str = "avg(property_reviews.rating)";

// ---------------------------------------------------------------------------
// Conditions and steps
// ---------------------------------------------------------------------------

/// One predicate waiting for its placeholder position.
#[derive(Debug, Clone, PartialEq)]
struct Condition {
    column: &'static str,
    operator: &'static str,
    value: Param,
}

impl Condition {
    fn new(column: &'static str, operator: &'static str, value: impl Into<Param>) -> Self {
        Self { column, operator, value: value.into() }
    }

    fn render(&self, position: usize) -> String {
        format!("{} {} ${}", self.column, self.operator, position)
    }
}

type Step = fn(&PropertyFilter) -> Option<Condition>;

/// Row-level predicates, in the order they appear in the statement.
const WHERE_STEPS: [Step; 4] = [city, owner, minimum_price, maximum_price];

/// Aggregate predicates; SQL only allows these after GROUP BY.
const HAVING_STEPS: [Step; 1] = [minimum_rating];

fn city(filter: &PropertyFilter) -> Option<Condition> {
    filter
        .city
        .as_deref()
        .filter(|c| !c.is_empty())
        .map(|c| Condition::new("city", "ILIKE", format!("%{c}%")))
}

fn owner(filter: &PropertyFilter) -> Option<Condition> {
    filter.owner_id.map(|id| Condition::new("owner_id", "=", id))
}

fn minimum_price(filter: &PropertyFilter) -> Option<Condition> {
    filter
        .minimum_price_per_night
        .map(|p| Condition::new("cost_per_night", ">=", p))
}

fn maximum_price(filter: &PropertyFilter) -> Option<Condition> {
    filter
        .maximum_price_per_night
        .map(|p| Condition::new("cost_per_night", "<=", p))
}

fn minimum_rating(filter: &PropertyFilter) -> Option<Condition> {
    filter
        .minimum_rating
        .map(|r| Condition::new(AVERAGE_RATING, ">=", r))
}

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct Clauses {
    params: Vec<Param>,
    where_fragments: Vec<String>,
    having_fragments: Vec<String>,
}

impl Clauses {
    /// Push the value and return its 1-based placeholder position.
    fn bind(&mut self, value: Param) -> usize {
        self.params.push(value);
        self.params.len()
    }

    fn push_where(mut self, condition: Condition) -> Self {
        let position = self.bind(condition.value.clone());
        self.where_fragments.push(condition.render(position));
        self
    }

    fn push_having(mut self, condition: Condition) -> Self {
        let position = self.bind(condition.value.clone());
        self.having_fragments.push(condition.render(position));
        self
    }
}

fn render_fragments(lines: &mut Vec<String>, keyword: &str, fragments: &[String]) {
    for (i, fragment) in fragments.iter().enumerate() {
        let lead = if i == 0 { keyword } else { "AND" };
        lines.push(format!("{lead} {fragment}"));
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Build the property-search statement for `filter` (absent ≡ empty) capped
/// at `limit` rows, cheapest first.
pub fn build_property_search(filter: Option<&PropertyFilter>, limit: i64) -> Statement {
    let empty = PropertyFilter::default();
    let filter = filter.unwrap_or(&empty);

    let clauses = WHERE_STEPS
        .iter()
        .filter_map(|step| step(filter))
        .fold(Clauses::default(), Clauses::push_where);

    let mut clauses = HAVING_STEPS
        .iter()
        .filter_map(|step| step(filter))
        .fold(clauses, Clauses::push_having);

    let limit_position = clauses.bind(Param::Int(limit));

    let mut lines = vec![SELECT_PROPERTIES.to_string()];
    render_fragments(&mut lines, "WHERE", &clauses.where_fragments);
    lines.push("GROUP BY properties.id".to_string());
    render_fragments(&mut lines, "HAVING", &clauses.having_fragments);
    lines.push("ORDER BY cost_per_night ASC".to_string());
    lines.push(format!("LIMIT ${limit_position}"));

    Statement::from_parts(lines.join("\n"), clauses.params).ordered_by("cost_per_night")
}
