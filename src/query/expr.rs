//! Query expression tree
//!
//! Expressions are built upstream by the query builder and flow through the
//! analyzer read-only.

use crate::semantic_model::{
    AggregateFunction, ConceptualProperty, DataType, FederatedSchema, PropertyKind,
};
use super::visitor::ExprVisitor;

/// A node in the query expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum QueryExpr {
    /// A whole conceptual entity
    Entity(EntityRef),
    /// An attribute column under `source`
    Column(FieldRef),
    /// A model measure under `source`
    Measure(FieldRef),
    /// An aggregate applied to a sub-expression
    Aggregation(AggregationExpr),
    Literal(Literal),
    /// Binary arithmetic, e.g. `a - b`
    Arithmetic {
        left: Box<QueryExpr>,
        op: ArithmeticOp,
        right: Box<QueryExpr>,
    },
    /// CASE WHEN expression
    Case {
        /// List of (condition, result) pairs
        when_then: Vec<(QueryExpr, QueryExpr)>,
        else_result: Option<Box<QueryExpr>>,
    },
}

/// Reference to an entity within a named schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub schema: String,
    pub entity: String,
}

/// Reference to a named property (column or measure) of `source`
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRef {
    pub source: Box<QueryExpr>,
    pub name: String,
}

/// `func(arg)`
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationExpr {
    pub func: AggregateFunction,
    pub arg: Box<QueryExpr>,
}

/// Literal values
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

/// Arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Whether a field is a model measure or a plain attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Measure,
    Attribute,
}

/// Type and role information for a resolvable expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMetadata {
    pub data_type: DataType,
    pub kind: FieldKind,
    /// The field is (part of) its entity's key
    pub id_on_entity_key: bool,
}

/// An expression decomposed into schema, entity and property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPattern<'a> {
    pub schema: &'a str,
    pub entity: &'a str,
    pub field: PatternField<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternField<'a> {
    Column(&'a str),
    Measure(&'a str),
}

impl<'a> PatternField<'a> {
    pub fn name(&self) -> &'a str {
        match *self {
            PatternField::Column(name) | PatternField::Measure(name) => name,
        }
    }
}

impl QueryExpr {
    /// `schema.entity`
    pub fn entity(schema: impl Into<String>, entity: impl Into<String>) -> Self {
        QueryExpr::Entity(EntityRef {
            schema: schema.into(),
            entity: entity.into(),
        })
    }

    /// Column `name` under `source`
    pub fn column(source: QueryExpr, name: impl Into<String>) -> Self {
        QueryExpr::Column(FieldRef {
            source: Box::new(source),
            name: name.into(),
        })
    }

    /// Measure `name` under `source`
    pub fn measure(source: QueryExpr, name: impl Into<String>) -> Self {
        QueryExpr::Measure(FieldRef {
            source: Box::new(source),
            name: name.into(),
        })
    }

    /// `func(arg)`
    pub fn aggregate(func: AggregateFunction, arg: QueryExpr) -> Self {
        QueryExpr::Aggregation(AggregationExpr {
            func,
            arg: Box::new(arg),
        })
    }

    /// Double dispatch into `visitor`
    pub fn accept<V: ExprVisitor>(&self, visitor: &V) -> V::Output {
        match self {
            QueryExpr::Entity(entity) => visitor.visit_entity(self, entity),
            QueryExpr::Column(field) => visitor.visit_column(self, field),
            QueryExpr::Measure(field) => visitor.visit_measure(self, field),
            QueryExpr::Aggregation(aggr) => visitor.visit_aggregation(self, aggr),
            QueryExpr::Literal(lit) => visitor.visit_literal(self, lit),
            QueryExpr::Arithmetic { .. } => visitor.visit_arithmetic(self),
            QueryExpr::Case { .. } => visitor.visit_case(self),
        }
    }

    /// Remove exactly one aggregation layer.
    ///
    /// Non-aggregation expressions are returned unchanged.
    pub fn strip_aggregation(&self) -> &QueryExpr {
        match self {
            QueryExpr::Aggregation(aggr) => aggr.arg.as_ref(),
            other => other,
        }
    }

    /// Decompose into `{schema, entity, column-or-measure}`.
    ///
    /// Aggregations decompose to their argument's pattern. Fails for
    /// anything whose source is not an entity reference.
    pub fn field_pattern(&self) -> Option<FieldPattern<'_>> {
        match self {
            QueryExpr::Column(field) => {
                let entity = field.source_entity()?;
                Some(FieldPattern {
                    schema: &entity.schema,
                    entity: &entity.entity,
                    field: PatternField::Column(&field.name),
                })
            }
            QueryExpr::Measure(field) => {
                let entity = field.source_entity()?;
                Some(FieldPattern {
                    schema: &entity.schema,
                    entity: &entity.entity,
                    field: PatternField::Measure(&field.name),
                })
            }
            QueryExpr::Aggregation(aggr) => aggr.arg.field_pattern(),
            _ => None,
        }
    }

    /// Resolve the column or measure this expression refers to
    pub fn conceptual_property<'s>(&self, schema: &'s FederatedSchema) -> Option<ConceptualProperty<'s>> {
        let pattern = match self {
            QueryExpr::Column(_) | QueryExpr::Measure(_) => self.field_pattern()?,
            _ => return None,
        };
        let conceptual = schema.schema(pattern.schema)?;
        let entity = conceptual.entity(pattern.entity)?;
        let kind = match pattern.field {
            PatternField::Column(name) => PropertyKind::Column(entity.column(name)?),
            PatternField::Measure(name) => PropertyKind::Measure(entity.measure(name)?),
        };
        Some(ConceptualProperty {
            schema: &conceptual.name,
            entity,
            kind,
        })
    }

    /// Type and role of this expression, if it resolves against `schema`
    pub fn metadata(&self, schema: &FederatedSchema) -> Option<FieldMetadata> {
        match self {
            QueryExpr::Column(_) | QueryExpr::Measure(_) => {
                let property = self.conceptual_property(schema)?;
                Some(match property.kind {
                    PropertyKind::Column(column) => FieldMetadata {
                        data_type: column.data_type.clone(),
                        kind: FieldKind::Attribute,
                        id_on_entity_key: column.key,
                    },
                    PropertyKind::Measure(measure) => FieldMetadata {
                        data_type: measure.data_type(),
                        kind: FieldKind::Measure,
                        id_on_entity_key: false,
                    },
                })
            }
            QueryExpr::Aggregation(aggr) => {
                let inner = aggr.arg.metadata(schema)?;
                Some(FieldMetadata {
                    data_type: aggr.func.result_type(&inner.data_type),
                    kind: FieldKind::Measure,
                    id_on_entity_key: false,
                })
            }
            _ => None,
        }
    }
}

impl FieldRef {
    fn source_entity(&self) -> Option<&EntityRef> {
        match self.source.as_ref() {
            QueryExpr::Entity(entity) => Some(entity),
            _ => None,
        }
    }
}
