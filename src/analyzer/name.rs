//! Default display names for expressions

use std::collections::HashSet;
use crate::naming::find_unique_name;
use crate::query::{AggregationExpr, EntityRef, ExprVisitor, FieldRef, NamedExpr, QueryExpr};

/// Fallback used when naming a new projection
pub const DEFAULT_FALLBACK: &str = "select";

/// Label for variants that have no natural name and no caller fallback
const UNNAMED: &str = "expr";

struct DefaultNameVisitor<'f> {
    fallback: Option<&'f str>,
}

impl ExprVisitor for DefaultNameVisitor<'_> {
    type Output = String;

    fn visit_default(&self, _expr: &QueryExpr) -> String {
        self.fallback.unwrap_or(UNNAMED).to_string()
    }

    fn visit_entity(&self, _expr: &QueryExpr, entity: &EntityRef) -> String {
        entity.entity.clone()
    }

    fn visit_column(&self, _expr: &QueryExpr, field: &FieldRef) -> String {
        format!("{}.{}", field.source.accept(self), field.name)
    }

    fn visit_measure(&self, _expr: &QueryExpr, field: &FieldRef) -> String {
        format!("{}.{}", field.source.accept(self), field.name)
    }

    fn visit_aggregation(&self, _expr: &QueryExpr, aggr: &AggregationExpr) -> String {
        format!("{}({})", aggr.func.token(), aggr.arg.accept(self))
    }
}

/// Canonical label for `expr`.
///
/// A missing expression yields `fallback` (or `"select"`). Variants without a
/// natural name yield `fallback`, or `"expr"` when none was supplied.
pub fn default_name(expr: Option<&QueryExpr>, fallback: Option<&str>) -> String {
    match expr {
        None => fallback.unwrap_or(DEFAULT_FALLBACK).to_string(),
        Some(expr) => expr.accept(&DefaultNameVisitor { fallback }),
    }
}

/// `default_name` with the standard `"select"` fallback
pub fn default_name_of(expr: &QueryExpr) -> String {
    default_name(Some(expr), Some(DEFAULT_FALLBACK))
}

/// Default name for `expr`, disambiguated against the names already taken
/// by `named_exprs`
pub fn unique_name(named_exprs: &[NamedExpr], expr: &QueryExpr) -> String {
    let candidate = default_name_of(expr);
    let used: HashSet<String> = named_exprs.iter().map(|n| n.name.clone()).collect();
    find_unique_name(&used, &candidate)
}
