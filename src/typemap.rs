//! SQL type to LookML type mapping.

use std::fmt;

/// LookML dimension types the generator knows how to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookmlType {
    String,
    Yesno,
    Number,
    Time,
    Double,
    /// No mapping known; carries the SQL type so the output surfaces it for
    /// manual correction instead of dropping the column.
    Unknown(String),
}

impl fmt::Display for LookmlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookmlType::String => f.write_str("string"),
            LookmlType::Yesno => f.write_str("yesno"),
            LookmlType::Number => f.write_str("number"),
            LookmlType::Time => f.write_str("time"),
            LookmlType::Double => f.write_str("double"),
            LookmlType::Unknown(sql_type) => write!(f, "unknown({sql_type})"),
        }
    }
}

/// Exact-match pairs from SQL type names to LookML types.
const TYPE_MAP: &[(&str, LookmlType)] = &[
    ("character varying", LookmlType::String),
    ("boolean", LookmlType::Yesno),
    ("bigint", LookmlType::Number),
    ("timestamp without time zone", LookmlType::Time),
    ("double precision", LookmlType::Double),
];

/// Maps a SQL type string to its LookML type. Unmapped input, empty
/// included, falls back to [`LookmlType::Unknown`] rather than failing.
pub fn lookml_type(sql_type: &str) -> LookmlType {
    TYPE_MAP
        .iter()
        .find(|(sql, _)| *sql == sql_type)
        .map(|(_, mapped)| mapped.clone())
        .unwrap_or_else(|| LookmlType::Unknown(sql_type.to_string()))
}
