//! Root schema definition

use serde::Deserialize;
use std::collections::HashSet;
use super::entity::ConceptualEntity;
use crate::error::SchemaError;

/// A federation of conceptual schemas, addressed by schema name.
///
/// This is the read-only snapshot every analyzer operation consults.
#[derive(Debug, Default, Deserialize)]
pub struct FederatedSchema {
    #[serde(default)]
    pub schemas: Vec<ConceptualSchema>,
}

/// A conceptual schema - the entities of one data source plus its capabilities
#[derive(Debug, Deserialize)]
pub struct ConceptualSchema {
    pub name: String,
    /// Capability flags. Omitted flags default to false.
    #[serde(default)]
    pub capabilities: Capabilities,
    #[serde(default)]
    pub entities: Vec<ConceptualEntity>,
}

/// Query capabilities advertised by a data source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Capabilities {
    /// The source can evaluate MEDIAN over numeric fields
    #[serde(rename = "supportsMedian", default)]
    pub supports_median: bool,
    /// Query-level aggregation should not be offered for this source
    #[serde(rename = "discourageQueryAggregateUsage", default)]
    pub discourage_query_aggregate_usage: bool,
}

impl FederatedSchema {
    /// Get a conceptual schema by name
    pub fn schema(&self, name: &str) -> Option<&ConceptualSchema> {
        self.schemas.iter().find(|s| s.name == name)
    }

    /// Check structural consistency of the snapshot.
    ///
    /// Names must be unique per scope, and every KPI member must name a
    /// measure of the same entity.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for schema in &self.schemas {
            if !seen.insert(schema.name.as_str()) {
                return Err(SchemaError::DuplicateSchema(schema.name.clone()));
            }
            schema.validate()?;
        }
        Ok(())
    }
}

impl ConceptualSchema {
    /// Get an entity by name
    pub fn entity(&self, name: &str) -> Option<&ConceptualEntity> {
        self.entities.iter().find(|e| e.name == name)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for entity in &self.entities {
            if !seen.insert(entity.name.as_str()) {
                return Err(SchemaError::DuplicateEntity {
                    schema: self.name.clone(),
                    entity: entity.name.clone(),
                });
            }
            entity.validate()?;
        }
        Ok(())
    }
}
