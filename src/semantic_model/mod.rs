//! Semantic model types (nouns)
//!
//! These types represent the conceptual schema snapshot expressions are
//! analyzed against.

mod column;
mod entity;
mod measure;
mod schema;
mod types;

pub use column::ConceptualColumn;
pub use entity::{ConceptualEntity, ConceptualProperty, PropertyKind};
pub use measure::{ConceptualMeasure, Kpi};
pub use schema::{FederatedSchema, ConceptualSchema, Capabilities};
pub use types::{DataType, ValueType, AggregateFunction, ParseDataTypeError, ParseAggregateError};
