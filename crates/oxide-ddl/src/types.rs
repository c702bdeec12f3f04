//! Canonical column data types.
//!
//! Types arrive already normalized by the caller; this module only spells
//! them for a dialect. Types a dialect cannot store fall back to its
//! closest textual type.

use serde::{Deserialize, Serialize};

use crate::dialect::{BinaryStringStyle, DialectProfile, EnumStyle};
use crate::literal::quote_string;

/// Length used for strings declared without one.
pub const DEFAULT_STRING_LENGTH: u32 = 255;

/// A normalized column type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    /// Small integer (2 bytes).
    #[serde(rename = "SMALLINT")]
    SmallInt,
    /// Integer (4 bytes).
    Integer,
    /// Big integer (8 bytes).
    #[serde(rename = "BIGINT")]
    BigInt,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// Exact decimal with optional precision and scale.
    Decimal {
        /// Total number of digits.
        precision: Option<u16>,
        /// Digits after the decimal point.
        scale: Option<u16>,
    },
    /// Boolean.
    Boolean,
    /// Variable-length string.
    String {
        /// Maximum length; defaults to 255.
        #[serde(default)]
        length: Option<u32>,
        /// Whether comparisons are binary.
        #[serde(default)]
        binary: bool,
    },
    /// Fixed-length string.
    Char(Option<u32>),
    /// Unbounded text.
    Text,
    /// Binary large object.
    Blob,
    /// JSON document.
    Json,
    /// Spatial geometry.
    Geometry,
    /// UUID.
    Uuid,
    /// Date only.
    Date,
    /// Time only.
    Time,
    /// Date and time.
    #[serde(rename = "DATETIME")]
    DateTime,
    /// Enumeration of string values.
    Enum(Vec<String>),
    /// Array of another type.
    Array(Box<DataType>),
    /// A type spelled verbatim.
    Raw(String),
}

impl DataType {
    /// Renders the type for the given dialect.
    ///
    /// Enums using CHECK emulation render only their storage type; the
    /// constraint itself needs the column name and is added by the
    /// translator.
    #[must_use]
    pub fn to_sql(&self, profile: &DialectProfile) -> String {
        let names = &profile.types;
        match self {
            Self::SmallInt => String::from("SMALLINT"),
            Self::Integer => String::from("INTEGER"),
            Self::BigInt => String::from("BIGINT"),
            Self::Float => String::from("FLOAT"),
            Self::Double => String::from(names.double),
            Self::Decimal { precision, scale } => match (precision, scale) {
                (Some(p), Some(s)) => format!("DECIMAL({p}, {s})"),
                (Some(p), None) => format!("DECIMAL({p})"),
                _ => String::from("DECIMAL"),
            },
            Self::Boolean => String::from(names.boolean),
            Self::String { length, binary } => {
                let length = length.unwrap_or(DEFAULT_STRING_LENGTH);
                let plain = format!("{}({length})", names.varchar);
                if !binary {
                    return plain;
                }
                match names.binary_string {
                    BinaryStringStyle::Suffix(suffix) => plain + suffix,
                    BinaryStringStyle::Type(name) => String::from(name),
                    BinaryStringStyle::Sized(name) => format!("{name}({length})"),
                }
            }
            Self::Char(len) => match len {
                Some(n) => format!("{}({n})", names.char),
                None => String::from(names.char),
            },
            Self::Text => String::from(names.text),
            Self::Blob => String::from(names.blob),
            Self::Json => String::from(names.json.unwrap_or(names.text)),
            Self::Geometry => String::from(names.geometry.unwrap_or(names.text)),
            Self::Uuid => String::from(names.uuid),
            Self::Date => String::from("DATE"),
            Self::Time => String::from("TIME"),
            Self::DateTime => String::from(names.datetime),
            Self::Enum(values) => match profile.enums {
                EnumStyle::Native => {
                    let values: Vec<String> =
                        values.iter().map(|v| quote_string(v, profile)).collect();
                    format!("ENUM({})", values.join(", "))
                }
                EnumStyle::Check(name) | EnumStyle::Plain(name) => String::from(name),
            },
            Self::Array(element) => {
                if names.arrays {
                    format!("{}[]", element.to_sql(profile))
                } else {
                    String::from(names.json.unwrap_or(names.text))
                }
            }
            Self::Raw(name) => name.clone(),
        }
    }

    /// Whether the type is stored out of row (TEXT, BLOB, JSON, spatial).
    #[must_use]
    pub const fn is_large_object(&self) -> bool {
        matches!(self, Self::Text | Self::Blob | Self::Json | Self::Geometry)
    }

    /// Whether the type is a string compared as bytes.
    #[must_use]
    pub const fn is_binary_string(&self) -> bool {
        matches!(self, Self::String { binary: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dialect;

    #[test]
    fn test_text_types() {
        assert_eq!(DataType::Text.to_sql(Dialect::Postgres.profile()), "TEXT");
        assert_eq!(
            DataType::Text.to_sql(Dialect::Mssql.profile()),
            "NVARCHAR(MAX)"
        );
        assert_eq!(
            DataType::Text.to_sql(Dialect::Db2.profile()),
            "CLOB(2147483647)"
        );
    }

    #[test]
    fn test_binary_strings() {
        let ty = DataType::String {
            length: None,
            binary: true,
        };
        assert_eq!(ty.to_sql(Dialect::Mysql.profile()), "VARCHAR(255) BINARY");
        assert_eq!(ty.to_sql(Dialect::Sqlite.profile()), "TEXT COLLATE BINARY");
        assert_eq!(ty.to_sql(Dialect::Ibmi.profile()), "VARCHAR(255) FOR BIT DATA");
        assert_eq!(ty.to_sql(Dialect::Mssql.profile()), "VARBINARY(255)");
        assert_eq!(ty.to_sql(Dialect::Postgres.profile()), "BYTEA");
    }

    #[test]
    fn test_enum_array() {
        let ty = DataType::Array(Box::new(DataType::Enum(vec![
            "value1".to_string(),
            "value2".to_string(),
        ])));
        assert_eq!(
            ty.to_sql(Dialect::Postgres.profile()),
            "ENUM('value1', 'value2')[]"
        );
        assert_eq!(ty.to_sql(Dialect::Mysql.profile()), "JSON");
    }

    #[test]
    fn test_enum_fallbacks() {
        let ty = DataType::Enum(vec!["a".to_string()]);
        assert_eq!(ty.to_sql(Dialect::Sqlite.profile()), "TEXT");
        assert_eq!(ty.to_sql(Dialect::Snowflake.profile()), "VARCHAR(255)");
        assert_eq!(ty.to_sql(Dialect::Mssql.profile()), "NVARCHAR(255)");
    }

    #[test]
    fn test_json_fallback() {
        assert_eq!(DataType::Json.to_sql(Dialect::Sqlite.profile()), "TEXT");
        assert_eq!(DataType::Json.to_sql(Dialect::Snowflake.profile()), "TEXT");
        assert_eq!(DataType::Json.to_sql(Dialect::Postgres.profile()), "JSON");
    }

    #[test]
    fn test_deserialize_from_json() {
        let ty: DataType = serde_json::from_str("\"INTEGER\"").unwrap();
        assert_eq!(ty, DataType::Integer);
        let ty: DataType = serde_json::from_str(r#"{"ENUM": ["a", "b"]}"#).unwrap();
        assert_eq!(ty, DataType::Enum(vec!["a".to_string(), "b".to_string()]));
        let ty: DataType = serde_json::from_str(r#"{"STRING": {"length": 64}}"#).unwrap();
        assert_eq!(
            ty,
            DataType::String {
                length: Some(64),
                binary: false
            }
        );
    }
}
