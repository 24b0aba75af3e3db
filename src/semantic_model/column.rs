//! Column definitions for conceptual entities

use serde::Deserialize;
use super::types::DataType;

/// An attribute column of an entity
#[derive(Debug, Deserialize)]
pub struct ConceptualColumn {
    pub name: String,
    pub label: Option<String>,
    /// Data type. Defaults to String if not specified.
    #[serde(rename = "type", default)]
    pub data_type: DataType,
    /// Part of the entity key (identity property, never null)
    #[serde(default)]
    pub key: bool,
}
