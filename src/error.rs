//! Error types for semexpr
//!
//! Only schema loading can fail. Analyzer operations report "not
//! resolvable" as `None` or an empty result, never as an error.

use std::fmt;

/// Errors that can occur while loading a schema
#[derive(Debug)]
pub enum ParseError {
    /// IO error reading file
    Io {
        path: String,
        source: std::io::Error,
    },
    /// YAML deserialization error
    Yaml {
        source: serde_yaml::Error,
    },
    /// The document parsed but describes an inconsistent schema
    Invalid(SchemaError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io { path, source } => {
                write!(f, "Failed to read '{}': {}", path, source)
            }
            ParseError::Yaml { source } => {
                write!(f, "Invalid YAML: {}", source)
            }
            ParseError::Invalid(err) => write!(f, "Invalid schema: {}", err),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io { source, .. } => Some(source),
            ParseError::Yaml { source } => Some(source),
            ParseError::Invalid(err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        ParseError::Yaml { source: err }
    }
}

impl From<SchemaError> for ParseError {
    fn from(err: SchemaError) -> Self {
        ParseError::Invalid(err)
    }
}

/// Structural problems found when validating a schema snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    DuplicateSchema(String),
    DuplicateEntity { schema: String, entity: String },
    /// A column and/or measure share a name within one entity
    DuplicateProperty { entity: String, name: String },
    /// A KPI status or goal names a measure the entity does not define
    UnknownKpiMember { entity: String, measure: String, member: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateSchema(name) => write!(f, "Schema '{}' is defined more than once", name),
            SchemaError::DuplicateEntity { schema, entity } => {
                write!(f, "Entity '{}' is defined more than once in schema '{}'", entity, schema)
            }
            SchemaError::DuplicateProperty { entity, name } => {
                write!(f, "Property '{}' is defined more than once in entity '{}'", name, entity)
            }
            SchemaError::UnknownKpiMember { entity, measure, member } => {
                write!(
                    f,
                    "KPI on measure '{}.{}' references unknown measure '{}'",
                    entity, measure, member
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {}
