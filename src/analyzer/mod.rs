//! Expression analyzer (verb module)
//!
//! Stateless decisions over a `QueryExpr` and a `FederatedSchema` snapshot:
//! - `aggregates` - which aggregate functions are legal for an expression
//! - `compare` - structural equality over expression sequences
//! - `name` - default and unique display names
//! - `measure` - whether an expression denotes a measure
//! - `kpi` - KPI status lookups and aggregation capabilities

mod aggregates;
mod compare;
mod kpi;
mod measure;
mod name;

pub use aggregates::{supported_aggregates, is_supported_aggregate};
pub use compare::{index_of_expr, sequence_equal};
pub use kpi::{kpi_status, kpi_status_graphic, discourage_aggregation};
pub use measure::is_measure;
pub use name::{default_name, default_name_of, unique_name, DEFAULT_FALLBACK};
