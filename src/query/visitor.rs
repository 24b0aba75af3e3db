//! Double dispatch over `QueryExpr`
//!
//! A visitor overrides the variants it cares about; everything else lands in
//! `visit_default`. Dispatch itself is an exhaustive match in
//! `QueryExpr::accept`, so a new variant must be wired in there before the
//! crate compiles again.

use super::expr::{AggregationExpr, EntityRef, FieldRef, Literal, QueryExpr};

pub trait ExprVisitor {
    type Output;

    /// Fallback for every variant the visitor does not override
    fn visit_default(&self, expr: &QueryExpr) -> Self::Output;

    fn visit_entity(&self, expr: &QueryExpr, _entity: &EntityRef) -> Self::Output {
        self.visit_default(expr)
    }

    fn visit_column(&self, expr: &QueryExpr, _field: &FieldRef) -> Self::Output {
        self.visit_default(expr)
    }

    fn visit_measure(&self, expr: &QueryExpr, _field: &FieldRef) -> Self::Output {
        self.visit_default(expr)
    }

    fn visit_aggregation(&self, expr: &QueryExpr, _aggr: &AggregationExpr) -> Self::Output {
        self.visit_default(expr)
    }

    fn visit_literal(&self, expr: &QueryExpr, _literal: &Literal) -> Self::Output {
        self.visit_default(expr)
    }

    fn visit_arithmetic(&self, expr: &QueryExpr) -> Self::Output {
        self.visit_default(expr)
    }

    fn visit_case(&self, expr: &QueryExpr) -> Self::Output {
        self.visit_default(expr)
    }
}
