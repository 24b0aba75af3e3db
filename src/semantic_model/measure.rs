//! Measure and KPI types

use serde::Deserialize;
use super::types::DataType;

/// A model measure. Its aggregation is fixed by the model, so queries
/// cannot re-aggregate it.
#[derive(Debug, Deserialize)]
pub struct ConceptualMeasure {
    pub name: String,
    pub label: Option<String>,
    /// Human-readable description for UIs
    pub description: Option<String>,
    /// Result data type. Defaults to F64.
    #[serde(rename = "type")]
    pub data_type: Option<DataType>,
    /// KPI declared on this measure (this measure is the KPI value)
    pub kpi: Option<Kpi>,
}

impl ConceptualMeasure {
    /// Get the result data type
    pub fn data_type(&self) -> DataType {
        self.data_type.clone().unwrap_or(DataType::F64)
    }
}

/// KPI annotation linking a value measure to its status and goal measures
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Kpi {
    /// Sibling measure holding the status value
    pub status: Option<String>,
    /// Sibling measure holding the goal value
    pub goal: Option<String>,
    /// Graphic used to render the status (e.g., "Traffic Light")
    #[serde(rename = "statusGraphic")]
    pub status_graphic: Option<String>,
}
