//! Aggregate legality
//!
//! Decides which aggregate functions a query may apply to an expression.
//! Resolution reads only expression metadata and schema capabilities; it must
//! never go through a validation path that itself asks for the supported
//! aggregates, or the two would recurse forever.

use tracing::{debug, warn};
use crate::query::{FieldKind, FieldMetadata, QueryExpr};
use crate::semantic_model::{AggregateFunction, FederatedSchema, ValueType};

/// Aggregates offered for numeric fields, in display order
const NUMERIC_AGGREGATES: [AggregateFunction; 8] = [
    AggregateFunction::Sum,
    AggregateFunction::Avg,
    AggregateFunction::Min,
    AggregateFunction::Max,
    AggregateFunction::Count,
    AggregateFunction::CountNonNull,
    AggregateFunction::StandardDeviation,
    AggregateFunction::Variance,
];

/// Ordered list of aggregate functions that may be applied to `expr`.
///
/// The order is meant to be rendered as-is. Empty when the expression is a
/// measure, is used for grouping only, or does not resolve against `schema`.
pub fn supported_aggregates(
    expr: &QueryExpr,
    is_grouping_only: bool,
    schema: &FederatedSchema,
) -> Vec<AggregateFunction> {
    let Some(metadata) = underlying_metadata(expr, schema) else {
        debug!(?expr, "no metadata, no aggregates");
        return Vec::new();
    };

    // Model measures carry their own fixed aggregation
    if metadata.kind == FieldKind::Measure {
        return Vec::new();
    }

    if is_grouping_only {
        return Vec::new();
    }

    match metadata.data_type.value_type() {
        Some(ValueType::Numeric) | Some(ValueType::Integer) => {
            let mut aggregates = NUMERIC_AGGREGATES.to_vec();
            if supports_median(expr, schema) {
                aggregates.push(AggregateFunction::Median);
            }
            aggregates
        }
        Some(ValueType::Text) | Some(ValueType::Bool) | Some(ValueType::DateTime) => {
            // Key columns are never null, so Count would duplicate CountNonNull
            if metadata.id_on_entity_key {
                vec![AggregateFunction::CountNonNull]
            } else {
                vec![AggregateFunction::Count, AggregateFunction::CountNonNull]
            }
        }
        None => {
            // Malformed metadata is reported, never surfaced to the caller
            warn!(data_type = %metadata.data_type, ?expr, "metadata has no recognized value type");
            Vec::new()
        }
    }
}

/// Whether `func` is among the aggregates supported for `expr`
pub fn is_supported_aggregate(
    expr: &QueryExpr,
    func: AggregateFunction,
    is_grouping_only: bool,
    schema: &FederatedSchema,
) -> bool {
    supported_aggregates(expr, is_grouping_only, schema).contains(&func)
}

/// Metadata of the value being aggregated: one aggregation layer is looked
/// through, falling back to the expression itself.
fn underlying_metadata(expr: &QueryExpr, schema: &FederatedSchema) -> Option<FieldMetadata> {
    expr.strip_aggregation()
        .metadata(schema)
        .or_else(|| expr.metadata(schema))
}

/// Probe the owning schema's median capability. Expressions that do not
/// decompose into a field simply get no median.
fn supports_median(expr: &QueryExpr, schema: &FederatedSchema) -> bool {
    expr.field_pattern()
        .and_then(|pattern| schema.schema(pattern.schema))
        .is_some_and(|s| s.capabilities.supports_median)
}
