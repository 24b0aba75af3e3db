//! Schema parser (verb module)
//!
//! Transforms YAML documents into a validated `FederatedSchema`.

use std::path::Path;
use tracing::debug;
use crate::error::ParseError;
use crate::semantic_model::FederatedSchema;

/// Parse a schema from a YAML file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<FederatedSchema, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str.clone(),
        source: e,
    })?;
    debug!(path = %path_str, "loading schema");
    parse_str(&contents)
}

/// Parse a schema from a YAML string
pub fn parse_str(yaml: &str) -> Result<FederatedSchema, ParseError> {
    let schema: FederatedSchema = serde_yaml::from_str(yaml)?;
    schema.validate()?;
    debug!(
        schemas = schema.schemas.len(),
        entities = schema.schemas.iter().map(|s| s.entities.len()).sum::<usize>(),
        "schema loaded"
    );
    Ok(schema)
}
