//! SQLite profile.

use super::{
    AlterColumnStyle, AutoIncrementStyle, BinaryLiteral, BinaryStringStyle, CommentStyle, Dialect,
    DialectProfile, EnumStyle, NullPolicy, QuotePair, ReferenceStyle, SchemaStyle, StringEscape,
    TypeNames,
};

pub(super) static SQLITE: DialectProfile = DialectProfile {
    dialect: Dialect::Sqlite,
    identifier_quote: QuotePair {
        open: '`',
        close: '`',
    },
    string_escape: StringEscape::Doubled,
    national_strings: false,
    native_booleans: false,
    binary_literal: BinaryLiteral::HexString,
    // AUTOINCREMENT is only valid on INTEGER PRIMARY KEY columns.
    auto_increment: AutoIncrementStyle::PrimaryKeyKeyword("AUTOINCREMENT"),
    null_policy: NullPolicy::Implicit,
    alter_column: AlterColumnStyle::Inline,
    alter_column_unique: true,
    unique_on_identity_key: true,
    enums: EnumStyle::Plain("TEXT"),
    comments: CommentStyle::Unsupported,
    positional_columns: false,
    references: ReferenceStyle::Inline,
    deferrable_constraints: false,
    on_update_cascade: true,
    self_reference_actions: true,
    schemas: SchemaStyle::Flattened,
    inherit_reference_schema: false,
    parenthesize_expressions: false,
    lob_defaults: true,
    binary_string_defaults: true,
    spatial_constructor: None,
    types: TypeNames {
        varchar: "VARCHAR",
        char: "CHAR",
        text: "TEXT",
        blob: "BLOB",
        boolean: "INTEGER",
        double: "REAL",
        datetime: "DATETIME",
        uuid: "TEXT",
        json: Some("TEXT"),
        geometry: None,
        arrays: false,
        binary_string: BinaryStringStyle::Type("TEXT COLLATE BINARY"),
    },
};
