//! Measure classification
//!
//! Model measures and query aggregations both produce aggregated values.

use crate::query::{AggregationExpr, ExprVisitor, FieldRef, QueryExpr};

struct MeasureVisitor;

impl ExprVisitor for MeasureVisitor {
    type Output = bool;

    fn visit_default(&self, _expr: &QueryExpr) -> bool {
        false
    }

    fn visit_measure(&self, _expr: &QueryExpr, _field: &FieldRef) -> bool {
        true
    }

    fn visit_aggregation(&self, _expr: &QueryExpr, _aggr: &AggregationExpr) -> bool {
        true
    }
}

/// Whether `expr` already denotes a measure: a model measure or an
/// aggregation of something
pub fn is_measure(expr: &QueryExpr) -> bool {
    expr.accept(&MeasureVisitor)
}
