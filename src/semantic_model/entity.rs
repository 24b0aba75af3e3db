//! Entity and property types

use serde::Deserialize;
use std::collections::HashSet;
use super::column::ConceptualColumn;
use super::measure::{ConceptualMeasure, Kpi};
use crate::error::SchemaError;

/// A conceptual entity (table) with its columns and model measures
#[derive(Debug, Deserialize)]
pub struct ConceptualEntity {
    pub name: String,
    pub label: Option<String>,
    #[serde(default)]
    pub columns: Vec<ConceptualColumn>,
    #[serde(default)]
    pub measures: Vec<ConceptualMeasure>,
}

impl ConceptualEntity {
    /// Get a column by name
    pub fn column(&self, name: &str) -> Option<&ConceptualColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get a measure by name
    pub fn measure(&self, name: &str) -> Option<&ConceptualMeasure> {
        self.measures.iter().find(|m| m.name == name)
    }

    /// Find the measure whose KPI uses `status` as its status member
    pub fn kpi_with_status(&self, status: &str) -> Option<&ConceptualMeasure> {
        self.measures.iter().find(|m| {
            m.kpi
                .as_ref()
                .and_then(|kpi| kpi.status.as_deref())
                .is_some_and(|s| s == status)
        })
    }

    pub(crate) fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        let names = self
            .columns
            .iter()
            .map(|c| c.name.as_str())
            .chain(self.measures.iter().map(|m| m.name.as_str()));
        for name in names {
            if !seen.insert(name) {
                return Err(SchemaError::DuplicateProperty {
                    entity: self.name.clone(),
                    name: name.to_string(),
                });
            }
        }

        for measure in &self.measures {
            let Some(kpi) = &measure.kpi else {
                continue;
            };
            for member in [&kpi.status, &kpi.goal].into_iter().flatten() {
                if self.measure(member).is_none() {
                    return Err(SchemaError::UnknownKpiMember {
                        entity: self.name.clone(),
                        measure: measure.name.clone(),
                        member: member.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// A resolved property: the column or measure an expression points at,
/// together with the entity and schema that own it.
#[derive(Debug, Clone, Copy)]
pub struct ConceptualProperty<'a> {
    pub schema: &'a str,
    pub entity: &'a ConceptualEntity,
    pub kind: PropertyKind<'a>,
}

/// Which kind of property was resolved
#[derive(Debug, Clone, Copy)]
pub enum PropertyKind<'a> {
    Column(&'a ConceptualColumn),
    Measure(&'a ConceptualMeasure),
}

impl<'a> ConceptualProperty<'a> {
    /// Property name
    pub fn name(&self) -> &'a str {
        match self.kind {
            PropertyKind::Column(c) => &c.name,
            PropertyKind::Measure(m) => &m.name,
        }
    }

    /// The measure definition, if this property is a measure
    pub fn measure(&self) -> Option<&'a ConceptualMeasure> {
        match self.kind {
            PropertyKind::Measure(m) => Some(m),
            PropertyKind::Column(_) => None,
        }
    }

    /// KPI declared directly on this property
    pub fn kpi(&self) -> Option<&'a Kpi> {
        self.measure()?.kpi.as_ref()
    }
}
