//! Data type and aggregate function definitions for the semantic model

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Physical type of a column or measure value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataType {
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Bool,
    /// Columns without a declared type are text
    #[default]
    String,
    Date,
    Timestamp,
    /// Fixed-point decimal, `decimal(precision, scale)`
    Decimal { precision: u8, scale: u8 },
    /// Opaque payload (images, blobs). Carries no value category, so no
    /// aggregate applies to it.
    Binary,
}

/// Accepted spellings of the non-parameterized types. The first entry for a
/// type is its canonical token.
const TYPE_TOKENS: &[(&str, DataType)] = &[
    ("i8", DataType::I8),
    ("i16", DataType::I16),
    ("i32", DataType::I32),
    ("int", DataType::I32),
    ("integer", DataType::I32),
    ("i64", DataType::I64),
    ("long", DataType::I64),
    ("bigint", DataType::I64),
    ("f32", DataType::F32),
    ("float", DataType::F32),
    ("f64", DataType::F64),
    ("double", DataType::F64),
    ("bool", DataType::Bool),
    ("boolean", DataType::Bool),
    ("string", DataType::String),
    ("text", DataType::String),
    ("varchar", DataType::String),
    ("date", DataType::Date),
    ("timestamp", DataType::Timestamp),
    ("datetime", DataType::Timestamp),
    ("binary", DataType::Binary),
    ("blob", DataType::Binary),
];

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let DataType::Decimal { precision, scale } = self {
            return write!(f, "decimal({}, {})", precision, scale);
        }
        let token = TYPE_TOKENS
            .iter()
            .find(|(_, ty)| ty == self)
            .map_or("?", |(token, _)| *token);
        f.write_str(token)
    }
}

/// Error when parsing a data type string
#[derive(Debug, Clone)]
pub struct ParseDataTypeError {
    pub input: String,
    pub message: &'static str,
}

impl ParseDataTypeError {
    fn new(input: &str, message: &'static str) -> Self {
        ParseDataTypeError {
            input: input.to_string(),
            message,
        }
    }
}

impl fmt::Display for ParseDataTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid data type '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for ParseDataTypeError {}

impl FromStr for DataType {
    type Err = ParseDataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        if let Some(args) = lower
            .strip_prefix("decimal(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_decimal(s, args);
        }

        TYPE_TOKENS
            .iter()
            .find(|(token, _)| *token == lower)
            .map(|(_, ty)| ty.clone())
            .ok_or_else(|| ParseDataTypeError::new(s, "unknown type"))
    }
}

/// `args` is the text between the parentheses of `decimal(...)`
fn parse_decimal(input: &str, args: &str) -> Result<DataType, ParseDataTypeError> {
    let (precision, scale) = args.split_once(',').ok_or_else(|| {
        ParseDataTypeError::new(input, "decimal requires precision and scale, e.g. decimal(18, 2)")
    })?;
    let precision: u8 = precision
        .trim()
        .parse()
        .map_err(|_| ParseDataTypeError::new(input, "invalid precision"))?;
    let scale: u8 = scale
        .trim()
        .parse()
        .map_err(|_| ParseDataTypeError::new(input, "invalid scale"))?;

    if !(1..=38).contains(&precision) {
        return Err(ParseDataTypeError::new(input, "precision must be between 1 and 38"));
    }
    if scale > precision {
        return Err(ParseDataTypeError::new(input, "scale cannot exceed precision"));
    }
    Ok(DataType::Decimal { precision, scale })
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DataType::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for DataType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// ============================================================================
// Value type classification
// ============================================================================

/// The value-type category that drives aggregate legality.
///
/// Every well-modeled data type falls into exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// Floating point or fixed-point decimal
    Numeric,
    /// Whole numbers
    Integer,
    Text,
    Bool,
    /// Dates and timestamps
    DateTime,
}

impl DataType {
    /// Classify this type for aggregate resolution.
    ///
    /// Returns `None` for types that carry no recognized value category.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            DataType::I8 | DataType::I16 | DataType::I32 | DataType::I64 => Some(ValueType::Integer),
            DataType::F32 | DataType::F64 | DataType::Decimal { .. } => Some(ValueType::Numeric),
            DataType::String => Some(ValueType::Text),
            DataType::Bool => Some(ValueType::Bool),
            DataType::Date | DataType::Timestamp => Some(ValueType::DateTime),
            DataType::Binary => None,
        }
    }
}

// ============================================================================
// AggregateFunction
// ============================================================================

/// Aggregate functions a query can apply to a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFunction {
    Sum,
    Avg,
    Min,
    Max,
    /// Count of rows
    Count,
    /// Count of rows where the value is not null
    CountNonNull,
    StandardDeviation,
    Variance,
    Median,
}

impl AggregateFunction {
    /// Stable display token, used for labels and serialization
    pub fn token(&self) -> &'static str {
        match self {
            AggregateFunction::Sum => "Sum",
            AggregateFunction::Avg => "Avg",
            AggregateFunction::Min => "Min",
            AggregateFunction::Max => "Max",
            AggregateFunction::Count => "Count",
            AggregateFunction::CountNonNull => "CountNonNull",
            AggregateFunction::StandardDeviation => "StandardDeviation",
            AggregateFunction::Variance => "Variance",
            AggregateFunction::Median => "Median",
        }
    }

    /// Result type of applying this function to a value of `input` type
    pub fn result_type(&self, input: &DataType) -> DataType {
        match self {
            AggregateFunction::Count | AggregateFunction::CountNonNull => DataType::I64,
            AggregateFunction::Avg
            | AggregateFunction::StandardDeviation
            | AggregateFunction::Variance
            | AggregateFunction::Median => DataType::F64,
            AggregateFunction::Sum | AggregateFunction::Min | AggregateFunction::Max => input.clone(),
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error when parsing an aggregate function string
#[derive(Debug, Clone)]
pub struct ParseAggregateError {
    pub input: String,
}

impl fmt::Display for ParseAggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown aggregate '{}'. Valid options: sum, avg, min, max, count, countnonnull, standarddeviation, variance, median",
            self.input
        )
    }
}

impl std::error::Error for ParseAggregateError {}

impl FromStr for AggregateFunction {
    type Err = ParseAggregateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sum" => Ok(AggregateFunction::Sum),
            "avg" | "average" => Ok(AggregateFunction::Avg),
            "min" | "minimum" => Ok(AggregateFunction::Min),
            "max" | "maximum" => Ok(AggregateFunction::Max),
            "count" => Ok(AggregateFunction::Count),
            "countnonnull" | "count_non_null" => Ok(AggregateFunction::CountNonNull),
            "standarddeviation" | "standard_deviation" | "stdev" | "stddev" => {
                Ok(AggregateFunction::StandardDeviation)
            }
            "variance" | "var" => Ok(AggregateFunction::Variance),
            "median" => Ok(AggregateFunction::Median),
            _ => Err(ParseAggregateError { input: s.to_string() }),
        }
    }
}

impl<'de> Deserialize<'de> for AggregateFunction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AggregateFunction::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl Serialize for AggregateFunction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_types() {
        assert_eq!("i32".parse::<DataType>().unwrap(), DataType::I32);
        assert_eq!("I64".parse::<DataType>().unwrap(), DataType::I64);
        assert_eq!("string".parse::<DataType>().unwrap(), DataType::String);
        assert_eq!("bool".parse::<DataType>().unwrap(), DataType::Bool);
        assert_eq!("timestamp".parse::<DataType>().unwrap(), DataType::Timestamp);
        assert_eq!("binary".parse::<DataType>().unwrap(), DataType::Binary);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("int".parse::<DataType>().unwrap(), DataType::I32);
        assert_eq!("bigint".parse::<DataType>().unwrap(), DataType::I64);
        assert_eq!("double".parse::<DataType>().unwrap(), DataType::F64);
        assert_eq!("text".parse::<DataType>().unwrap(), DataType::String);
        assert_eq!("datetime".parse::<DataType>().unwrap(), DataType::Timestamp);
        assert_eq!("blob".parse::<DataType>().unwrap(), DataType::Binary);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(
            "DECIMAL(10,2)".parse::<DataType>().unwrap(),
            DataType::Decimal { precision: 10, scale: 2 }
        );
        assert!("decimal(5, 10)".parse::<DataType>().is_err());
        assert!("decimal(10)".parse::<DataType>().is_err());
        assert!("decimal(0, 0)".parse::<DataType>().is_err());
        assert!("decimal(a, 2)".parse::<DataType>().is_err());
    }

    #[test]
    fn test_display_uses_canonical_token() {
        assert_eq!(DataType::I32.to_string(), "i32");
        assert_eq!(DataType::Timestamp.to_string(), "timestamp");
        assert_eq!(DataType::Binary.to_string(), "binary");
        assert_eq!(DataType::Decimal { precision: 10, scale: 2 }.to_string(), "decimal(10, 2)");
        assert_eq!(DataType::default(), DataType::String);
    }

    #[test]
    fn test_value_type_classification() {
        assert_eq!(DataType::I16.value_type(), Some(ValueType::Integer));
        assert_eq!(DataType::F32.value_type(), Some(ValueType::Numeric));
        assert_eq!(
            DataType::Decimal { precision: 18, scale: 2 }.value_type(),
            Some(ValueType::Numeric)
        );
        assert_eq!(DataType::String.value_type(), Some(ValueType::Text));
        assert_eq!(DataType::Bool.value_type(), Some(ValueType::Bool));
        assert_eq!(DataType::Date.value_type(), Some(ValueType::DateTime));
        assert_eq!(DataType::Binary.value_type(), None);
    }

    #[test]
    fn test_aggregate_tokens() {
        assert_eq!(AggregateFunction::Sum.to_string(), "Sum");
        assert_eq!(AggregateFunction::CountNonNull.to_string(), "CountNonNull");
        assert_eq!(AggregateFunction::StandardDeviation.token(), "StandardDeviation");
    }

    #[test]
    fn test_parse_aggregate() {
        assert_eq!("SUM".parse::<AggregateFunction>().unwrap(), AggregateFunction::Sum);
        assert_eq!("average".parse::<AggregateFunction>().unwrap(), AggregateFunction::Avg);
        assert_eq!("stdev".parse::<AggregateFunction>().unwrap(), AggregateFunction::StandardDeviation);
        assert_eq!("CountNonNull".parse::<AggregateFunction>().unwrap(), AggregateFunction::CountNonNull);
        assert_eq!("median".parse::<AggregateFunction>().unwrap(), AggregateFunction::Median);
        assert!("count_distinct".parse::<AggregateFunction>().is_err());
    }

    #[test]
    fn test_aggregate_result_type() {
        assert_eq!(AggregateFunction::Count.result_type(&DataType::String), DataType::I64);
        assert_eq!(AggregateFunction::Avg.result_type(&DataType::I32), DataType::F64);
        assert_eq!(AggregateFunction::Max.result_type(&DataType::Date), DataType::Date);
    }

    #[test]
    fn test_aggregate_serde_uses_token() {
        let json = serde_json::to_string(&AggregateFunction::Variance).unwrap();
        assert_eq!(json, "\"Variance\"");
        let parsed: AggregateFunction = serde_json::from_str("\"min\"").unwrap();
        assert_eq!(parsed, AggregateFunction::Min);

        let dt: DataType = serde_json::from_str("\"decimal(18, 2)\"").unwrap();
        assert_eq!(dt, DataType::Decimal { precision: 18, scale: 2 });
    }
}
