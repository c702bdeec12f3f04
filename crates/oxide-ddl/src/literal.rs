//! Literal encoding for default values.
//!
//! [`quote_string`] is the only place user text becomes SQL, so every
//! string that reaches the output (comments, enum values, defaults) goes
//! through it.

use crate::descriptor::{DefaultValue, SqlFunction};
use crate::dialect::{BinaryLiteral, DialectProfile, StringEscape};
use crate::types::DataType;

/// Quotes a string literal using the profile's escaping rules.
#[must_use]
pub fn quote_string(value: &str, profile: &DialectProfile) -> String {
    let mut sql = String::with_capacity(value.len() + 3);
    if profile.national_strings {
        sql.push('N');
    }
    sql.push('\'');
    match profile.string_escape {
        StringEscape::Doubled => {
            for ch in value.chars() {
                if ch == '\'' {
                    sql.push('\'');
                }
                sql.push(ch);
            }
        }
        StringEscape::Backslash => {
            for ch in value.chars() {
                match ch {
                    '\0' => sql.push_str("\\0"),
                    '\u{8}' => sql.push_str("\\b"),
                    '\t' => sql.push_str("\\t"),
                    '\n' => sql.push_str("\\n"),
                    '\r' => sql.push_str("\\r"),
                    '\u{1a}' => sql.push_str("\\Z"),
                    '\'' | '"' | '\\' => {
                        sql.push('\\');
                        sql.push(ch);
                    }
                    _ => sql.push(ch),
                }
            }
        }
    }
    sql.push('\'');
    sql
}

/// Encodes a default value for a column of type `data_type`.
///
/// Returns `None` when the profile cannot express the default, either
/// because the column type does not accept defaults or because the value
/// kind has no encoding.
#[must_use]
pub fn encode_default(
    value: &DefaultValue,
    data_type: &DataType,
    profile: &DialectProfile,
) -> Option<String> {
    if data_type.is_large_object() && !profile.lob_defaults {
        return None;
    }
    if data_type.is_binary_string() && !profile.binary_string_defaults {
        return None;
    }

    match value {
        DefaultValue::Text(text) if *data_type == DataType::Json => {
            Some(quote_string(&serde_json::Value::from(text.as_str()).to_string(), profile))
        }
        DefaultValue::Text(text) if *data_type == DataType::Blob => {
            Some(encode_binary(text.as_bytes(), profile))
        }
        DefaultValue::Json(_) if profile.types.json.is_none() => None,
        DefaultValue::Geometry(_) if profile.spatial_constructor.is_none() => None,
        DefaultValue::Function(_) | DefaultValue::Raw(_) if profile.parenthesize_expressions => {
            Some(format!("({})", encode_literal(value, profile)))
        }
        _ => Some(encode_literal(value, profile)),
    }
}

/// Encodes a value without regard to the column it belongs to.
///
/// Used for function arguments. Geometries without a spatial constructor
/// fall back to their GeoJSON text.
#[must_use]
pub fn encode_literal(value: &DefaultValue, profile: &DialectProfile) -> String {
    match value {
        DefaultValue::Null => String::from("NULL"),
        DefaultValue::Boolean(flag) => encode_boolean(*flag, profile),
        DefaultValue::Integer(n) => n.to_string(),
        DefaultValue::Float(f) => encode_float(*f, profile),
        DefaultValue::Text(text) => quote_string(text, profile),
        DefaultValue::Binary(bytes) => encode_binary(bytes, profile),
        DefaultValue::Json(json) => quote_string(&json.to_string(), profile),
        DefaultValue::Geometry(geojson) => {
            let text = quote_string(&geojson.to_string(), profile);
            match profile.spatial_constructor {
                Some(constructor) => format!("{constructor}({text})"),
                None => text,
            }
        }
        DefaultValue::Function(function) => encode_function(function, profile),
        DefaultValue::Raw(sql) => sql.clone(),
    }
}

fn encode_boolean(flag: bool, profile: &DialectProfile) -> String {
    let sql = match (profile.native_booleans, flag) {
        (true, true) => "true",
        (true, false) => "false",
        (false, true) => "1",
        (false, false) => "0",
    };
    String::from(sql)
}

fn encode_float(value: f64, profile: &DialectProfile) -> String {
    if value.is_nan() {
        quote_string("NaN", profile)
    } else if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        quote_string(text, profile)
    } else {
        value.to_string()
    }
}

fn encode_binary(bytes: &[u8], profile: &DialectProfile) -> String {
    match profile.binary_literal {
        BinaryLiteral::HexString => format!("X'{}'", hex::encode(bytes)),
        BinaryLiteral::HexNumber => format!("0x{}", hex::encode(bytes)),
        BinaryLiteral::ByteaHex => format!("'\\x{}'", hex::encode(bytes)),
        BinaryLiteral::BlobFunction => format!("BLOB({})", binary_text(bytes, profile)),
        BinaryLiteral::Text => binary_text(bytes, profile),
    }
}

/// Bytes as a character literal when they are printable UTF-8, else as a
/// hex string so no byte is lost.
fn binary_text(bytes: &[u8], profile: &DialectProfile) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) if !text.chars().any(char::is_control) => quote_string(text, profile),
        _ => format!("X'{}'", hex::encode(bytes)),
    }
}

fn encode_function(function: &SqlFunction, profile: &DialectProfile) -> String {
    let args: Vec<String> = function
        .args
        .iter()
        .map(|arg| encode_literal(arg, profile))
        .collect();
    format!("{}({})", function.name, args.join(", "))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Dialect;

    #[test]
    fn test_quote_string_doubled() {
        let profile = Dialect::Postgres.profile();
        assert_eq!(quote_string("it's", profile), "'it''s'");
        assert_eq!(quote_string("a\\b", profile), "'a\\b'");
    }

    #[test]
    fn test_quote_string_backslash() {
        let profile = Dialect::Mysql.profile();
        assert_eq!(quote_string("it's", profile), "'it\\'s'");
        assert_eq!(quote_string("\0\u{1a}\"", profile), "'\\0\\Z\\\"'");
    }

    #[test]
    fn test_quote_string_national() {
        assert_eq!(quote_string("x", Dialect::Mssql.profile()), "N'x'");
    }

    #[test]
    fn test_boolean_literals() {
        let value = DefaultValue::Boolean(true);
        assert_eq!(
            encode_default(&value, &DataType::Boolean, Dialect::Postgres.profile()),
            Some("true".to_string())
        );
        assert_eq!(
            encode_default(&value, &DataType::Boolean, Dialect::Mssql.profile()),
            Some("1".to_string())
        );
        assert_eq!(
            encode_default(&DefaultValue::Boolean(false), &DataType::Boolean, Dialect::Sqlite.profile()),
            Some("0".to_string())
        );
    }

    #[test]
    fn test_binary_literals() {
        let value = DefaultValue::Binary(b"hi".to_vec());
        let encode = |dialect: Dialect| encode_default(&value, &DataType::Blob, dialect.profile());
        assert_eq!(encode(Dialect::Mysql), None);
        assert_eq!(encode(Dialect::Sqlite).as_deref(), Some("X'6869'"));
        assert_eq!(encode(Dialect::Mssql).as_deref(), Some("0x6869"));
        assert_eq!(encode(Dialect::Postgres).as_deref(), Some("'\\x6869'"));
        assert_eq!(encode(Dialect::Db2).as_deref(), Some("BLOB('hi')"));
        assert_eq!(encode(Dialect::Ibmi).as_deref(), Some("'hi'"));
    }

    #[test]
    fn test_non_utf8_binary_falls_back_to_hex() {
        let value = DefaultValue::Binary(vec![0xff, 0x00, 0xfe]);
        let encode = |dialect: Dialect| encode_default(&value, &DataType::Blob, dialect.profile());
        assert_eq!(encode(Dialect::Db2).as_deref(), Some("BLOB(X'ff00fe')"));
        assert_eq!(encode(Dialect::Ibmi).as_deref(), Some("X'ff00fe'"));

        let nul = DefaultValue::Binary(b"a\0b".to_vec());
        assert_eq!(
            encode_default(&nul, &DataType::Blob, Dialect::Ibmi.profile()).as_deref(),
            Some("X'610062'")
        );
    }

    #[test]
    fn test_text_on_json_column_is_json_encoded() {
        let value = DefaultValue::Text("it's".to_string());
        assert_eq!(
            encode_default(&value, &DataType::Json, Dialect::Postgres.profile()).as_deref(),
            Some("'\"it''s\"'")
        );
    }

    #[test]
    fn test_json_default() {
        let value = DefaultValue::Json(json!({"b": 1, "a": [true]}));
        assert_eq!(
            encode_default(&value, &DataType::Json, Dialect::Postgres.profile()).as_deref(),
            Some("'{\"b\":1,\"a\":[true]}'")
        );
        assert_eq!(
            encode_default(&value, &DataType::Json, Dialect::Snowflake.profile()),
            None
        );
    }

    #[test]
    fn test_geometry_default() {
        let value = DefaultValue::Geometry(json!({"type": "Point", "coordinates": [39.8, -75.1]}));
        assert_eq!(
            encode_default(&value, &DataType::Geometry, Dialect::Postgres.profile()).as_deref(),
            Some("ST_GeomFromGeoJSON('{\"type\":\"Point\",\"coordinates\":[39.8,-75.1]}')")
        );
        assert_eq!(
            encode_default(&value, &DataType::Geometry, Dialect::Sqlite.profile()),
            None
        );
    }

    #[test]
    fn test_function_with_arguments() {
        let value = DefaultValue::Function(
            SqlFunction::new("COALESCE")
                .arg(DefaultValue::Null)
                .arg(DefaultValue::Text("x".into())),
        );
        assert_eq!(
            encode_default(&value, &DataType::Text, Dialect::Postgres.profile()).as_deref(),
            Some("COALESCE(NULL, 'x')")
        );
        assert_eq!(
            encode_default(&value, &DataType::Integer, Dialect::Mysql.profile()).as_deref(),
            Some("(COALESCE(NULL, 'x'))")
        );
    }

    #[test]
    fn test_non_finite_floats_are_quoted() {
        let profile = Dialect::Postgres.profile();
        assert_eq!(encode_literal(&DefaultValue::Float(f64::NAN), profile), "'NaN'");
        assert_eq!(
            encode_literal(&DefaultValue::Float(f64::NEG_INFINITY), profile),
            "'-Infinity'"
        );
        assert_eq!(encode_literal(&DefaultValue::Float(1.5), profile), "1.5");
    }

    #[test]
    fn test_every_kind_encodes_on_every_profile() {
        let values = [
            DefaultValue::Null,
            DefaultValue::Boolean(true),
            DefaultValue::Integer(-3),
            DefaultValue::Float(0.25),
            DefaultValue::Text("x".into()),
            DefaultValue::Binary(vec![0, 255]),
            DefaultValue::Raw("CURRENT_TIMESTAMP".into()),
        ];
        for dialect in Dialect::ALL {
            for value in &values {
                assert!(
                    encode_default(value, &DataType::Integer, dialect.profile()).is_some(),
                    "{dialect}: {value:?}"
                );
            }
        }
    }
}
