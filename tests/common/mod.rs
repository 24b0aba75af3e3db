//! Shared test utilities for integration tests

#![allow(dead_code)]

use semexpr::{parser, AggregateFunction, FederatedSchema, QueryExpr};

/// Load a test fixture from the tests/test_data directory
pub fn load_fixture(name: &str) -> FederatedSchema {
    let path = format!("tests/test_data/{}", name);
    parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// `schema.entity.name` as a column reference
pub fn column(schema: &str, entity: &str, name: &str) -> QueryExpr {
    QueryExpr::column(QueryExpr::entity(schema, entity), name)
}

/// `schema.entity.name` as a measure reference
pub fn measure(schema: &str, entity: &str, name: &str) -> QueryExpr {
    QueryExpr::measure(QueryExpr::entity(schema, entity), name)
}

pub fn aggregate(func: AggregateFunction, arg: QueryExpr) -> QueryExpr {
    QueryExpr::aggregate(func, arg)
}

/// The eight aggregates every numeric field supports, in display order
pub fn numeric_aggregates() -> Vec<AggregateFunction> {
    use AggregateFunction::*;
    vec![Sum, Avg, Min, Max, Count, CountNonNull, StandardDeviation, Variance]
}
