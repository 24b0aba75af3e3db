//! KPI status resolution and aggregation capability lookups
//!
//! A KPI is declared on its value measure and names a sibling status
//! measure. Status lookups start from the status measure; only the graphic
//! lookup also honors a KPI declared directly on the property.

use crate::query::QueryExpr;
use crate::semantic_model::{ConceptualProperty, FederatedSchema, Kpi};

/// Expression for the KPI status measure, when `expr` is itself the status
/// member of a KPI in its entity.
///
/// A KPI's value measure does not resolve here.
pub fn kpi_status(expr: &QueryExpr, schema: &FederatedSchema) -> Option<QueryExpr> {
    let property = expr.conceptual_property(schema)?;
    let kpi = kpi_by_status(&property)?;
    let status = property.entity.measure(kpi.status.as_deref()?)?;
    Some(QueryExpr::measure(
        QueryExpr::entity(property.schema, property.entity.name.as_str()),
        status.name.as_str(),
    ))
}

/// Status graphic identifier for the KPI `expr` participates in.
///
/// A KPI declared directly on the property wins; otherwise the KPI that uses
/// the property as its status is consulted.
pub fn kpi_status_graphic(expr: &QueryExpr, schema: &FederatedSchema) -> Option<String> {
    let property = expr.conceptual_property(schema)?;
    if let Some(kpi) = property.kpi() {
        return kpi.status_graphic.clone();
    }
    kpi_by_status(&property)?.status_graphic.clone()
}

/// Whether the owning schema discourages query-level aggregation.
///
/// `None` when `expr` does not decompose into a field or names an unknown
/// schema.
pub fn discourage_aggregation(expr: &QueryExpr, schema: &FederatedSchema) -> Option<bool> {
    let pattern = expr.field_pattern()?;
    let owner = schema.schema(pattern.schema)?;
    Some(owner.capabilities.discourage_query_aggregate_usage)
}

/// KPI of the sibling measure whose status member is `property`
fn kpi_by_status<'a>(property: &ConceptualProperty<'a>) -> Option<&'a Kpi> {
    property.measure()?;
    property
        .entity
        .kpi_with_status(property.name())?
        .kpi
        .as_ref()
}
