//! Dialect capability profiles.
//!
//! Every supported database is described by a static [`DialectProfile`]:
//! a record of quoting rules, literal encodings and clause capabilities.
//! The translator consults the profile instead of branching on the
//! dialect name, so supporting a new database means adding a profile.

mod db2;
mod mssql;
mod mysql;
mod postgres;
mod snowflake;
mod sqlite;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

/// Supported SQL dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// PostgreSQL.
    #[default]
    Postgres,
    /// MySQL.
    Mysql,
    /// MariaDB.
    Mariadb,
    /// Microsoft SQL Server.
    Mssql,
    /// SQLite.
    Sqlite,
    /// Snowflake.
    Snowflake,
    /// IBM DB2 for Linux, Unix and Windows.
    Db2,
    /// IBM DB2 for i.
    Ibmi,
}

impl Dialect {
    /// All supported dialects.
    pub const ALL: [Self; 8] = [
        Self::Postgres,
        Self::Mysql,
        Self::Mariadb,
        Self::Mssql,
        Self::Sqlite,
        Self::Snowflake,
        Self::Db2,
        Self::Ibmi,
    ];

    /// Returns the canonical dialect name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Mariadb => "mariadb",
            Self::Mssql => "mssql",
            Self::Sqlite => "sqlite",
            Self::Snowflake => "snowflake",
            Self::Db2 => "db2",
            Self::Ibmi => "ibmi",
        }
    }

    /// Returns the capability profile of this dialect.
    #[must_use]
    pub fn profile(self) -> &'static DialectProfile {
        match self {
            Self::Postgres => &postgres::POSTGRES,
            Self::Mysql => &mysql::MYSQL,
            Self::Mariadb => &mysql::MARIADB,
            Self::Mssql => &mssql::MSSQL,
            Self::Sqlite => &sqlite::SQLITE,
            Self::Snowflake => &snowflake::SNOWFLAKE,
            Self::Db2 => &db2::DB2,
            Self::Ibmi => &db2::IBMI,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            "mysql" => Ok(Self::Mysql),
            "mariadb" => Ok(Self::Mariadb),
            "mssql" | "sqlserver" => Ok(Self::Mssql),
            "sqlite" | "sqlite3" => Ok(Self::Sqlite),
            "snowflake" => Ok(Self::Snowflake),
            "db2" => Ok(Self::Db2),
            "ibmi" => Ok(Self::Ibmi),
            _ => Err(TranslateError::UnknownDialect(s.to_string())),
        }
    }
}

/// Opening and closing identifier quote characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotePair {
    /// Opening character.
    pub open: char,
    /// Closing character; doubled when it appears inside a name.
    pub close: char,
}

/// How apostrophes and control characters are escaped inside string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringEscape {
    /// Backslash escapes (`\'`, `\\`, `\n`, ...).
    Backslash,
    /// Standard SQL: apostrophes are doubled, nothing else is escaped.
    Doubled,
}

/// Encoding of binary default values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryLiteral {
    /// `X'6869'`.
    HexString,
    /// `0x6869`.
    HexNumber,
    /// `'\x6869'` (bytea hex format).
    ByteaHex,
    /// `BLOB('hi')`.
    BlobFunction,
    /// `'hi'`.
    Text,
}

/// How autoincrement columns are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoIncrementStyle {
    /// A trailing keyword such as `auto_increment`.
    Keyword(&'static str),
    /// A trailing keyword that is only legal on primary keys.
    PrimaryKeyKeyword(&'static str),
    /// `SERIAL`, or `GENERATED BY DEFAULT AS IDENTITY` when identity is requested.
    Serial,
    /// `IDENTITY(1,1)`.
    Identity,
    /// `GENERATED BY DEFAULT AS IDENTITY(START WITH n, INCREMENT BY 1)`.
    Generated {
        /// Whether `initialAutoIncrement` sets the start value.
        honors_initial: bool,
        /// Whether a space separates `IDENTITY` from the parenthesis.
        spaced: bool,
    },
}

/// When a nullability clause is stated outside of column alterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullPolicy {
    /// Only `NOT NULL` is ever written.
    Implicit,
    /// `NULL` is written unless the column is a key, has a default or is a checked enum.
    Explicit,
    /// Primary keys are written `NOT NULL` as well.
    PrimaryKeyNotNull,
}

/// How a column alteration phrases type and nullability changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlterColumnStyle {
    /// Same phrasing as a column definition.
    Inline,
    /// `DATA TYPE <type>` with nullability as a separate sub-clause.
    DataType,
    /// `ADD CHECK` for enum checks and an inline `DROP NOT NULL`.
    Clauses,
}

/// How enum types are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumStyle {
    /// `ENUM('a', 'b')`.
    Native,
    /// A string type plus `CHECK (<column> IN(...))`.
    Check(&'static str),
    /// A plain string type; the allowed values are not enforced.
    Plain(&'static str),
}

/// Where column comments go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `COMMENT '<text>'` inside the column definition.
    Inline,
    /// A separate `COMMENT ON COLUMN` statement.
    OnColumn,
    /// Comments cannot be expressed.
    Unsupported,
}

/// How a named foreign key constraint is written when adding a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintNaming {
    /// Whether the constraint is separated from the column by a comma.
    pub leading_comma: bool,
    /// Keyword introducing the constraint.
    pub keyword: &'static str,
    /// Suffix of generated constraint names.
    pub suffix: &'static str,
    /// Whether the column is quoted inside the generated name.
    pub quote_column: bool,
    /// Whether the generated name is quoted.
    pub quote_name: bool,
}

/// How foreign keys are attached to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceStyle {
    /// Always an inline `REFERENCES` clause.
    Inline,
    /// Inline, except when adding a column, where a named constraint is used.
    NamedOnAdd(ConstraintNaming),
}

/// Schema qualification support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStyle {
    /// `"schema"."table"`.
    Native,
    /// Schema and table are joined into a single quoted identifier.
    Flattened,
}

/// How strings flagged as binary are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryStringStyle {
    /// The string type followed by a suffix, e.g. `VARCHAR(255) BINARY`.
    Suffix(&'static str),
    /// A fixed type replacing the string type.
    Type(&'static str),
    /// A sized binary type, e.g. `VARBINARY(255)`.
    Sized(&'static str),
}

/// Dialect spellings of the canonical data types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeNames {
    /// Variable-length string (`VARCHAR`).
    pub varchar: &'static str,
    /// Fixed-length string (`CHAR`).
    pub char: &'static str,
    /// Unbounded text.
    pub text: &'static str,
    /// Binary large object.
    pub blob: &'static str,
    /// Boolean.
    pub boolean: &'static str,
    /// Double precision float.
    pub double: &'static str,
    /// Date and time with zone where available.
    pub datetime: &'static str,
    /// UUID.
    pub uuid: &'static str,
    /// JSON, or `None` when the dialect has no JSON storage.
    pub json: Option<&'static str>,
    /// Spatial type, or `None` when unsupported.
    pub geometry: Option<&'static str>,
    /// Whether `<type>[]` arrays exist.
    pub arrays: bool,
    /// Binary string declaration.
    pub binary_string: BinaryStringStyle,
}

/// Static capability record of one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectProfile {
    /// The dialect this profile describes.
    pub dialect: Dialect,
    /// Identifier quoting.
    pub identifier_quote: QuotePair,
    /// String literal escaping.
    pub string_escape: StringEscape,
    /// Whether string literals carry the `N` prefix.
    pub national_strings: bool,
    /// Whether `true`/`false` literals exist; otherwise `1`/`0`.
    pub native_booleans: bool,
    /// Binary literal encoding.
    pub binary_literal: BinaryLiteral,
    /// Autoincrement declaration.
    pub auto_increment: AutoIncrementStyle,
    /// Nullability policy.
    pub null_policy: NullPolicy,
    /// Column alteration phrasing.
    pub alter_column: AlterColumnStyle,
    /// Whether `UNIQUE` can be changed while altering a column.
    pub alter_column_unique: bool,
    /// Whether `UNIQUE` may accompany an autoincrementing primary key.
    pub unique_on_identity_key: bool,
    /// Enum declaration.
    pub enums: EnumStyle,
    /// Comment placement.
    pub comments: CommentStyle,
    /// Whether `FIRST` / `AFTER` are supported.
    pub positional_columns: bool,
    /// Foreign key placement.
    pub references: ReferenceStyle,
    /// Whether `DEFERRABLE` constraints are supported.
    pub deferrable_constraints: bool,
    /// Whether `ON UPDATE CASCADE` is supported.
    pub on_update_cascade: bool,
    /// Whether self references may carry `ON DELETE` / `ON UPDATE`.
    pub self_reference_actions: bool,
    /// Schema qualification.
    pub schemas: SchemaStyle,
    /// Whether unqualified reference targets take the schema of the altered table.
    pub inherit_reference_schema: bool,
    /// Whether default expressions are wrapped in parentheses.
    pub parenthesize_expressions: bool,
    /// Whether TEXT, BLOB, JSON and spatial columns accept defaults.
    pub lob_defaults: bool,
    /// Whether binary strings accept defaults.
    pub binary_string_defaults: bool,
    /// Function building a geometry from GeoJSON, if any.
    pub spatial_constructor: Option<&'static str>,
    /// Data type spellings.
    pub types: TypeNames,
}
