//! Attribute descriptors: the abstract description of one column.
//!
//! A descriptor is produced by an upstream normalizer and handed to the
//! translator read-only. The fluent methods mirror the shape of a column
//! declaration so tests and callers can build descriptors inline.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::DataType;

/// A table name, optionally schema qualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TableRef {
    /// An unqualified table name.
    Name(String),
    /// A table name with an optional schema.
    Qualified {
        /// Table name.
        #[serde(rename = "tableName")]
        table_name: String,
        /// Schema name.
        #[serde(default)]
        schema: Option<String>,
    },
}

impl TableRef {
    /// Creates a schema-qualified table reference.
    #[must_use]
    pub fn qualified(table_name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self::Qualified {
            table_name: table_name.into(),
            schema: Some(schema.into()),
        }
    }

    /// Returns the bare table name.
    #[must_use]
    pub fn table_name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Qualified { table_name: name, .. } => name,
        }
    }

    /// Returns the schema, if any.
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        match self {
            Self::Name(_) => None,
            Self::Qualified { schema, .. } => schema.as_deref(),
        }
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Foreign key referential action (ON DELETE, ON UPDATE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferentialAction {
    /// No action.
    NoAction,
    /// Restrict deletion/update.
    Restrict,
    /// Cascade the operation.
    Cascade,
    /// Set to NULL.
    SetNull,
    /// Set to default value.
    SetDefault,
}

impl ReferentialAction {
    /// Parses an action, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for empty or unrecognized actions.
    #[must_use]
    pub fn parse(action: &str) -> Option<Self> {
        match action.trim().to_ascii_uppercase().as_str() {
            "NO ACTION" => Some(Self::NoAction),
            "RESTRICT" => Some(Self::Restrict),
            "CASCADE" => Some(Self::Cascade),
            "SET NULL" => Some(Self::SetNull),
            "SET DEFAULT" => Some(Self::SetDefault),
            _ => None,
        }
    }

    /// Returns the SQL representation of the action.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Restrict => "RESTRICT",
            Self::Cascade => "CASCADE",
            Self::SetNull => "SET NULL",
            Self::SetDefault => "SET DEFAULT",
        }
    }
}

impl fmt::Display for ReferentialAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// When a foreign key constraint is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Deferrable {
    /// Checked at commit unless changed by the transaction.
    InitiallyDeferred,
    /// Checked per statement unless changed by the transaction.
    InitiallyImmediate,
    /// Always checked per statement.
    NotDeferrable,
}

impl Deferrable {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::InitiallyDeferred => "DEFERRABLE INITIALLY DEFERRED",
            Self::InitiallyImmediate => "DEFERRABLE INITIALLY IMMEDIATE",
            Self::NotDeferrable => "NOT DEFERRABLE",
        }
    }
}

/// Target of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct References {
    /// Referenced table.
    pub table: TableRef,
    /// Referenced column; `id` when absent.
    #[serde(default)]
    pub key: Option<String>,
    /// Constraint checking mode.
    #[serde(default)]
    pub deferrable: Option<Deferrable>,
}

impl References {
    /// Column referenced when no key is given.
    pub const DEFAULT_KEY: &'static str = "id";

    /// References the `id` column of a table.
    #[must_use]
    pub fn to(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            key: None,
            deferrable: None,
        }
    }

    /// Sets the referenced column.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the deferrable mode.
    #[must_use]
    pub const fn deferrable(mut self, deferrable: Deferrable) -> Self {
        self.deferrable = Some(deferrable);
        self
    }

    /// Returns the referenced column.
    #[must_use]
    pub fn key_or_default(&self) -> &str {
        self.key.as_deref().unwrap_or(Self::DEFAULT_KEY)
    }
}

/// A raw SQL function call used as a default, e.g. `NOW()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlFunction {
    /// Function name, emitted verbatim.
    pub name: String,
    /// Arguments, encoded as literals.
    #[serde(default)]
    pub args: Vec<DefaultValue>,
}

impl SqlFunction {
    /// Creates a call without arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Appends an argument.
    #[must_use]
    pub fn arg(mut self, arg: DefaultValue) -> Self {
        self.args.push(arg);
        self
    }
}

/// Default value for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DefaultValue {
    /// NULL default.
    Null,
    /// Boolean default.
    Boolean(bool),
    /// Integer default.
    Integer(i64),
    /// Float default.
    Float(f64),
    /// String default.
    Text(String),
    /// Binary default.
    Binary(Vec<u8>),
    /// Structured value stored as JSON text.
    Json(serde_json::Value),
    /// GeoJSON geometry.
    Geometry(serde_json::Value),
    /// SQL function call.
    Function(SqlFunction),
    /// Raw SQL expression (e.g., `CURRENT_TIMESTAMP`).
    Raw(String),
}

/// The abstract description of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDescriptor {
    /// Normalized column type.
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Nullability; `None` leaves it to the dialect.
    #[serde(default)]
    pub allow_null: Option<bool>,
    /// Default value.
    #[serde(default)]
    pub default_value: Option<DefaultValue>,
    /// Whether the column autoincrements.
    #[serde(default)]
    pub auto_increment: bool,
    /// Prefer `GENERATED ... AS IDENTITY` where the dialect offers both.
    #[serde(default)]
    pub auto_increment_identity: bool,
    /// First autoincrement value.
    #[serde(default)]
    pub initial_auto_increment: Option<i64>,
    /// Whether this is the primary key.
    #[serde(default)]
    pub primary_key: bool,
    /// Whether the column is unique.
    #[serde(default)]
    pub unique: bool,
    /// Column comment.
    #[serde(default)]
    pub comment: Option<String>,
    /// Foreign key target.
    #[serde(default)]
    pub references: Option<References>,
    /// ON UPDATE action, case-insensitive.
    #[serde(default)]
    pub on_update: Option<String>,
    /// ON DELETE action, case-insensitive.
    #[serde(default)]
    pub on_delete: Option<String>,
    /// Place the column first.
    #[serde(default)]
    pub first: bool,
    /// Place the column after this one.
    #[serde(default)]
    pub after: Option<String>,
    /// Physical column name.
    #[serde(default)]
    pub field: Option<String>,
    /// Logical attribute key.
    #[serde(default)]
    pub key: Option<String>,
    /// Never emit a foreign key, even when `references` is set.
    #[serde(default)]
    pub without_foreign_key_constraints: bool,
    /// Table owning the attribute, used to detect self references.
    #[serde(default)]
    pub owner_table: Option<TableRef>,
}

impl AttributeDescriptor {
    /// Creates a descriptor with only a type.
    #[must_use]
    pub const fn new(data_type: DataType) -> Self {
        Self {
            data_type,
            allow_null: None,
            default_value: None,
            auto_increment: false,
            auto_increment_identity: false,
            initial_auto_increment: None,
            primary_key: false,
            unique: false,
            comment: None,
            references: None,
            on_update: None,
            on_delete: None,
            first: false,
            after: None,
            field: None,
            key: None,
            without_foreign_key_constraints: false,
            owner_table: None,
        }
    }

    /// Physical column name: `field`, falling back to `key`.
    #[must_use]
    pub fn column_name(&self) -> Option<&str> {
        self.field.as_deref().or(self.key.as_deref())
    }

    /// Normalized ON DELETE action.
    #[must_use]
    pub fn on_delete_action(&self) -> Option<ReferentialAction> {
        self.on_delete.as_deref().and_then(ReferentialAction::parse)
    }

    /// Normalized ON UPDATE action.
    #[must_use]
    pub fn on_update_action(&self) -> Option<ReferentialAction> {
        self.on_update.as_deref().and_then(ReferentialAction::parse)
    }

    /// Whether the attribute references its own table.
    #[must_use]
    pub fn is_self_reference(&self) -> bool {
        match (&self.references, &self.owner_table) {
            (Some(references), Some(owner)) => {
                references.table.table_name() == owner.table_name()
                    && references.table.schema() == owner.schema()
            }
            _ => false,
        }
    }

    /// Sets nullability.
    #[must_use]
    pub const fn allow_null(mut self, allow_null: bool) -> Self {
        self.allow_null = Some(allow_null);
        self
    }

    /// Marks the column as NOT NULL.
    #[must_use]
    pub const fn not_null(self) -> Self {
        self.allow_null(false)
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: DefaultValue) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Marks the column as autoincrementing.
    #[must_use]
    pub const fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    /// Requests an identity column where the dialect offers one.
    #[must_use]
    pub const fn auto_increment_identity(mut self) -> Self {
        self.auto_increment_identity = true;
        self
    }

    /// Sets the first autoincrement value.
    #[must_use]
    pub const fn initial_auto_increment(mut self, start: i64) -> Self {
        self.initial_auto_increment = Some(start);
        self
    }

    /// Marks the column as PRIMARY KEY.
    #[must_use]
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Marks the column as UNIQUE.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Sets the column comment.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the foreign key target.
    #[must_use]
    pub fn references(mut self, references: References) -> Self {
        self.references = Some(references);
        self
    }

    /// Sets the ON UPDATE action.
    #[must_use]
    pub fn on_update(mut self, action: impl Into<String>) -> Self {
        self.on_update = Some(action.into());
        self
    }

    /// Sets the ON DELETE action.
    #[must_use]
    pub fn on_delete(mut self, action: impl Into<String>) -> Self {
        self.on_delete = Some(action.into());
        self
    }

    /// Places the column first.
    #[must_use]
    pub const fn first(mut self) -> Self {
        self.first = true;
        self
    }

    /// Places the column after another one.
    #[must_use]
    pub fn after(mut self, column: impl Into<String>) -> Self {
        self.after = Some(column.into());
        self
    }

    /// Sets the physical column name.
    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the logical attribute key.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Suppresses foreign key emission.
    #[must_use]
    pub const fn without_foreign_key_constraints(mut self) -> Self {
        self.without_foreign_key_constraints = true;
        self
    }

    /// Sets the owning table.
    #[must_use]
    pub fn owner_table(mut self, table: impl Into<TableRef>) -> Self {
        self.owner_table = Some(table.into());
        self
    }
}

impl From<DataType> for AttributeDescriptor {
    fn from(data_type: DataType) -> Self {
        Self::new(data_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_referential_action_normalization() {
        assert_eq!(
            ReferentialAction::parse("SeT NuLl"),
            Some(ReferentialAction::SetNull)
        );
        assert_eq!(
            ReferentialAction::parse("nO AcTiOn"),
            Some(ReferentialAction::NoAction)
        );
        assert_eq!(ReferentialAction::parse(""), None);
        assert_eq!(ReferentialAction::parse("EXPLODE"), None);
    }

    #[test]
    fn test_column_name_prefers_field() {
        let attribute = AttributeDescriptor::new(DataType::Integer).key("baz");
        assert_eq!(attribute.column_name(), Some("baz"));
        let attribute = attribute.field("foo");
        assert_eq!(attribute.column_name(), Some("foo"));
    }

    #[test]
    fn test_self_reference() {
        let attribute = AttributeDescriptor::new(DataType::Integer)
            .references(References::to("users"))
            .owner_table("users");
        assert!(attribute.is_self_reference());
        let other = attribute.owner_table("posts");
        assert!(!other.is_self_reference());
    }

    #[test]
    fn test_deserialize_descriptor() {
        let json = r#"{
            "type": "INTEGER",
            "allowNull": false,
            "defaultValue": {"kind": "integer", "value": 1},
            "references": {"table": {"tableName": "Bar", "schema": "app"}, "key": "uid"},
            "onDelete": "cascade"
        }"#;
        let attribute: AttributeDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(attribute.data_type, DataType::Integer);
        assert_eq!(attribute.allow_null, Some(false));
        assert_eq!(attribute.default_value, Some(DefaultValue::Integer(1)));
        let references = attribute.references.as_ref().unwrap();
        assert_eq!(references.table, TableRef::qualified("Bar", "app"));
        assert_eq!(references.key_or_default(), "uid");
        assert_eq!(attribute.on_delete_action(), Some(ReferentialAction::Cascade));
    }

    #[test]
    fn test_null_default_is_unset() {
        let attribute: AttributeDescriptor =
            serde_json::from_str(r#"{"type": "INTEGER", "defaultValue": null}"#).unwrap();
        assert_eq!(attribute.default_value, None);
    }
}
