//! semexpr - Analyze query expressions against a semantic model
//!
//! This library provides:
//! - Schema snapshot types (FederatedSchema, ConceptualSchema, entities, KPIs)
//! - Schema parsing from YAML
//! - Query expression trees with visitor dispatch
//! - Aggregate legality, measure classification and default naming
//! - KPI status resolution
//!
//! # Architecture
//!
//! **Noun modules** (data structures):
//! - `semantic_model/` - conceptual schema (FederatedSchema, ConceptualEntity, Kpi, DataType)
//! - `query/` - expression types (QueryExpr, NamedExpr, ExprVisitor)
//!
//! **Verb modules** (transformations):
//! - `parser/` - YAML → FederatedSchema
//! - `analyzer/` - QueryExpr + FederatedSchema → decisions
//!
//! Every analyzer operation is a pure function over borrowed inputs; nothing
//! is mutated and unresolvable input yields `None` or an empty result.
//!
//! # Example
//!
//! ```ignore
//! use semexpr::{parser, supported_aggregates, default_name_of, QueryExpr};
//!
//! let schema = parser::parse_file("schema.yaml")?;
//! let amount = QueryExpr::column(QueryExpr::entity("sales_db", "Sales"), "Amount");
//! let aggregates = supported_aggregates(&amount, false, &schema);
//! assert_eq!(default_name_of(&amount), "Sales.Amount");
//! ```

pub mod semantic_model;
pub mod query;
pub mod parser;
pub mod analyzer;
pub mod naming;
pub mod error;

// Re-export commonly used types
pub use semantic_model::{
    FederatedSchema, ConceptualSchema, Capabilities, ConceptualEntity, ConceptualColumn,
    ConceptualMeasure, ConceptualProperty, PropertyKind, Kpi, DataType, ValueType, AggregateFunction,
};
pub use query::{
    QueryExpr, EntityRef, FieldRef, AggregationExpr, Literal, ArithmeticOp, FieldKind,
    FieldMetadata, FieldPattern, PatternField, NamedExpr, ExprVisitor,
};
pub use analyzer::{
    supported_aggregates, is_supported_aggregate, index_of_expr, sequence_equal,
    default_name, default_name_of, unique_name, is_measure,
    kpi_status, kpi_status_graphic, discourage_aggregation,
};
pub use naming::find_unique_name;
pub use error::{ParseError, SchemaError};
