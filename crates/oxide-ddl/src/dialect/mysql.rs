//! MySQL and MariaDB profiles.

use super::{
    AlterColumnStyle, AutoIncrementStyle, BinaryLiteral, BinaryStringStyle, CommentStyle,
    ConstraintNaming, Dialect, DialectProfile, EnumStyle, NullPolicy, QuotePair, ReferenceStyle,
    SchemaStyle, StringEscape, TypeNames,
};

const MYSQL_TYPES: TypeNames = TypeNames {
    varchar: "VARCHAR",
    char: "CHAR",
    text: "TEXT",
    blob: "BLOB",
    boolean: "TINYINT(1)",
    double: "DOUBLE PRECISION",
    datetime: "DATETIME",
    uuid: "CHAR(36) BINARY",
    json: Some("JSON"),
    geometry: Some("GEOMETRY"),
    arrays: false,
    binary_string: BinaryStringStyle::Suffix(" BINARY"),
};

const MYSQL_CONSTRAINTS: ConstraintNaming = ConstraintNaming {
    leading_comma: true,
    keyword: "ADD CONSTRAINT",
    suffix: "_foreign_idx",
    quote_column: false,
    quote_name: true,
};

const MYSQL_PROFILE: DialectProfile = DialectProfile {
    dialect: Dialect::Mysql,
    identifier_quote: QuotePair {
        open: '`',
        close: '`',
    },
    string_escape: StringEscape::Backslash,
    national_strings: false,
    native_booleans: true,
    binary_literal: BinaryLiteral::HexString,
    auto_increment: AutoIncrementStyle::Keyword("auto_increment"),
    null_policy: NullPolicy::Implicit,
    alter_column: AlterColumnStyle::Inline,
    alter_column_unique: true,
    unique_on_identity_key: true,
    enums: EnumStyle::Native,
    comments: CommentStyle::Inline,
    positional_columns: true,
    references: ReferenceStyle::NamedOnAdd(MYSQL_CONSTRAINTS),
    deferrable_constraints: false,
    on_update_cascade: true,
    self_reference_actions: true,
    schemas: SchemaStyle::Native,
    inherit_reference_schema: false,
    // Expression defaults require parentheses since MySQL 8.0.13.
    parenthesize_expressions: true,
    lob_defaults: false,
    binary_string_defaults: false,
    spatial_constructor: None,
    types: MYSQL_TYPES,
};

pub(super) static MYSQL: DialectProfile = MYSQL_PROFILE;

pub(super) static MARIADB: DialectProfile = DialectProfile {
    dialect: Dialect::Mariadb,
    parenthesize_expressions: false,
    ..MYSQL_PROFILE
};
