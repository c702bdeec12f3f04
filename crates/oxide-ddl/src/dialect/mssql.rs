//! Microsoft SQL Server profile.

use super::{
    AlterColumnStyle, AutoIncrementStyle, BinaryLiteral, BinaryStringStyle, CommentStyle, Dialect,
    DialectProfile, EnumStyle, NullPolicy, QuotePair, ReferenceStyle, SchemaStyle, StringEscape,
    TypeNames,
};

pub(super) static MSSQL: DialectProfile = DialectProfile {
    dialect: Dialect::Mssql,
    identifier_quote: QuotePair {
        open: '[',
        close: ']',
    },
    string_escape: StringEscape::Doubled,
    national_strings: true,
    native_booleans: false,
    binary_literal: BinaryLiteral::HexNumber,
    auto_increment: AutoIncrementStyle::Identity,
    null_policy: NullPolicy::Explicit,
    alter_column: AlterColumnStyle::Inline,
    alter_column_unique: false,
    unique_on_identity_key: true,
    enums: EnumStyle::Check("NVARCHAR(255)"),
    comments: CommentStyle::Inline,
    positional_columns: false,
    references: ReferenceStyle::Inline,
    deferrable_constraints: false,
    on_update_cascade: true,
    // Cascading paths on self references are rejected as cycles.
    self_reference_actions: false,
    schemas: SchemaStyle::Native,
    inherit_reference_schema: false,
    parenthesize_expressions: false,
    lob_defaults: true,
    binary_string_defaults: true,
    spatial_constructor: None,
    types: TypeNames {
        varchar: "NVARCHAR",
        char: "NCHAR",
        text: "NVARCHAR(MAX)",
        blob: "VARBINARY(MAX)",
        boolean: "BIT",
        double: "FLOAT",
        datetime: "DATETIMEOFFSET",
        uuid: "UNIQUEIDENTIFIER",
        json: Some("NVARCHAR(MAX)"),
        geometry: None,
        arrays: false,
        binary_string: BinaryStringStyle::Sized("VARBINARY"),
    },
};
