//! PostgreSQL profile.

use super::{
    AlterColumnStyle, AutoIncrementStyle, BinaryLiteral, BinaryStringStyle, CommentStyle, Dialect,
    DialectProfile, EnumStyle, NullPolicy, QuotePair, ReferenceStyle, SchemaStyle, StringEscape,
    TypeNames,
};

pub(super) static POSTGRES: DialectProfile = DialectProfile {
    dialect: Dialect::Postgres,
    identifier_quote: QuotePair {
        open: '"',
        close: '"',
    },
    string_escape: StringEscape::Doubled,
    national_strings: false,
    native_booleans: true,
    binary_literal: BinaryLiteral::ByteaHex,
    auto_increment: AutoIncrementStyle::Serial,
    null_policy: NullPolicy::Implicit,
    alter_column: AlterColumnStyle::Inline,
    alter_column_unique: true,
    unique_on_identity_key: true,
    enums: EnumStyle::Native,
    // COMMENT is not column syntax in PostgreSQL.
    comments: CommentStyle::OnColumn,
    positional_columns: false,
    references: ReferenceStyle::Inline,
    deferrable_constraints: true,
    on_update_cascade: true,
    self_reference_actions: true,
    schemas: SchemaStyle::Native,
    inherit_reference_schema: true,
    parenthesize_expressions: false,
    lob_defaults: true,
    binary_string_defaults: true,
    spatial_constructor: Some("ST_GeomFromGeoJSON"),
    types: TypeNames {
        varchar: "VARCHAR",
        char: "CHAR",
        text: "TEXT",
        blob: "BYTEA",
        boolean: "BOOLEAN",
        double: "DOUBLE PRECISION",
        datetime: "TIMESTAMP WITH TIME ZONE",
        uuid: "UUID",
        json: Some("JSON"),
        geometry: Some("GEOMETRY"),
        arrays: true,
        binary_string: BinaryStringStyle::Type("BYTEA"),
    },
};
